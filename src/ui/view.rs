use serde::Serialize;

use crate::records::CorrelationDataset;
use crate::state::color_system::ColorSystem;
use crate::ui::legend::{self, LegendEntry};
use crate::ui::table::{self, CorrelationRow, RowOptions};

/// Render-ready correlation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrelationView {
    pub mission: String,
    pub legend: Vec<LegendEntry>,
    pub rows: Vec<CorrelationRow>,
}

/// The legend is built first so badge ordinals come from one batch covering
/// every point in the dataset.
pub fn build_view(
    system: &mut ColorSystem,
    dataset: &CorrelationDataset,
    options: &RowOptions,
) -> CorrelationView {
    let legend = legend::build_legend(system, &dataset.cells);
    let rows = table::build_rows(system, &dataset.cells, &dataset.results, options);
    CorrelationView {
        mission: dataset.mission.clone(),
        legend,
        rows,
    }
}

pub fn render_text(view: &CorrelationView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Mission {}\n", view.mission));

    out.push_str("\nHUNTER points\n");
    if view.legend.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in legend::legend_lines(&view.legend) {
        out.push_str(&format!("  {line}\n"));
    }

    out.push_str(&format!("\nCorrelations ({})\n", view.rows.len()));
    if view.rows.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in table::row_lines(&view.rows) {
        out.push_str(&format!("  {line}\n"));
    }
    out
}
