use serde::Serialize;

use crate::records::CellRecord;
use crate::state::cells;
use crate::state::color_system::ColorSystem;
use crate::ui::colors::ColorDefinition;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub point: String,
    pub ordinal: u32,
    pub color: &'static ColorDefinition,
    pub style: String,
}

/// Every point in the records, numbered as one batch and ordered by ordinal.
pub fn build_legend(system: &mut ColorSystem, records: &[CellRecord]) -> Vec<LegendEntry> {
    let points = cells::distinct_points(records);
    let ordinals = system.assign_ordinals(&points);

    let mut entries: Vec<LegendEntry> = points
        .into_iter()
        .filter_map(|point| {
            let ordinal = *ordinals.get(point)?;
            Some(LegendEntry {
                point: point.to_owned(),
                ordinal,
                color: system.resolve_color(point),
                style: system.point_badge_style(point),
            })
        })
        .collect();
    entries.sort_by(|a, b| {
        a.ordinal
            .cmp(&b.ordinal)
            .then_with(|| a.point.to_lowercase().cmp(&b.point.to_lowercase()))
    });
    entries
}

pub fn legend_lines(entries: &[LegendEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("[{:>2}] {:<24} {}", e.ordinal, e.point, e.color.name))
        .collect()
}
