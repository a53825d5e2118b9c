use serde::Serialize;

use crate::config::SortMode;
use crate::records::{CellRecord, CorrelationEntry, Role};
use crate::state::cells;
use crate::state::color_system::ColorSystem;

#[derive(Clone, Debug, Default)]
pub struct RowOptions {
    pub min_occurrences: u32,
    pub sort_mode: SortMode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellBadge {
    pub cell_id: String,
    pub point: Option<String>,
    pub ordinal: Option<u32>,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrelationRow {
    pub target_number: String,
    pub operator: String,
    pub occurrences: u32,
    pub first_detection: String,
    pub last_detection: String,
    pub role: Role,
    pub cells: Vec<CellBadge>,
    /// Distinct points the row's cells map to.
    pub points: Vec<String>,
}

pub fn build_rows(
    system: &mut ColorSystem,
    records: &[CellRecord],
    results: &[CorrelationEntry],
    options: &RowOptions,
) -> Vec<CorrelationRow> {
    let mut visible: Vec<&CorrelationEntry> = results
        .iter()
        .filter(|r| r.occurrences >= options.min_occurrences)
        .collect();

    match options.sort_mode {
        SortMode::Occurrences => visible.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.target_number.cmp(&b.target_number))
        }),
        SortMode::TargetNumber => visible.sort_by(|a, b| a.target_number.cmp(&b.target_number)),
    }

    visible
        .into_iter()
        .map(|entry| build_row(system, records, entry))
        .collect()
}

fn build_row(
    system: &mut ColorSystem,
    records: &[CellRecord],
    entry: &CorrelationEntry,
) -> CorrelationRow {
    let badges = entry
        .related_cells
        .iter()
        .map(|cell_id| {
            let point = cells::map_cell_to_point(cell_id, records);
            CellBadge {
                cell_id: cell_id.clone(),
                point: point.map(str::to_owned),
                ordinal: point.and_then(|p| system.get_ordinal(p)),
                style: system.compose_badge_style(cell_id, entry.role, records),
            }
        })
        .collect();

    CorrelationRow {
        target_number: entry.target_number.clone(),
        operator: entry.operator.clone().unwrap_or_else(|| "-".to_string()),
        occurrences: entry.occurrences,
        first_detection: format_detection(entry.first_detection),
        last_detection: format_detection(entry.last_detection),
        role: entry.role,
        cells: badges,
        points: cells::points_for_correlation(entry, records)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}

/// Unix milliseconds as `YYYY-MM-DD HH:MM` UTC, or `-`.
pub fn format_detection(ts_millis: Option<i64>) -> String {
    ts_millis
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn row_lines(rows: &[CorrelationRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|c| match c.ordinal {
                    Some(n) => format!("{}#{n}", c.cell_id),
                    None => c.cell_id.clone(),
                })
                .collect();
            format!(
                "{:<14} {:<10} {:>4}  {} .. {}  {:<10} {}",
                row.target_number,
                row.operator,
                row.occurrences,
                row.first_detection,
                row.last_detection,
                row.role,
                cells.join(" ")
            )
        })
        .collect()
}
