use crate::records::{CellRecord, CorrelationEntry};

/// Resolve the HUNTER point that observed `cell_id`.
///
/// An exact `cellId` match wins; otherwise the first record whose id contains
/// `cell_id` is used, which absorbs padding and prefix differences between
/// operator and scanner exports.
pub fn map_cell_to_point<'a>(cell_id: &str, records: &'a [CellRecord]) -> Option<&'a str> {
    if cell_id.is_empty() || records.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|r| !r.punto.is_empty() && r.cell_id == cell_id)
        .or_else(|| {
            records
                .iter()
                .find(|r| !r.punto.is_empty() && r.cell_id.contains(cell_id))
        })
        .map(|r| r.punto.as_str())
}

/// Distinct points reached by a correlation's related cells, first seen first.
pub fn points_for_correlation<'a>(
    entry: &CorrelationEntry,
    records: &'a [CellRecord],
) -> Vec<&'a str> {
    let mut points: Vec<&'a str> = Vec::new();
    for cell in &entry.related_cells {
        if let Some(point) = map_cell_to_point(cell, records) {
            if !points.contains(&point) {
                points.push(point);
            }
        }
    }
    points
}

/// Distinct points present in the records, in record order.
pub fn distinct_points(records: &[CellRecord]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .map(|r| r.punto.as_str())
        .filter(|p| !p.trim().is_empty() && seen.insert(*p))
        .collect()
}
