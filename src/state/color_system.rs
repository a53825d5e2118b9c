use std::collections::HashMap;

use serde::Serialize;

use crate::records::{CellRecord, Role};
use crate::state::cells;
use crate::state::ordinals::OrdinalCache;
use crate::ui::badge;
use crate::ui::colors::{self, ColorDefinition};

/// Snapshot of cache sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub colors: usize,
    pub ordinals: usize,
    pub highest_ordinal: u32,
}

/// Per-session visual identity of HUNTER points.
///
/// Owns the color and ordinal caches. Create one when an investigative session
/// starts and call [`ColorSystem::clear_all_caches`] when it ends; nothing here
/// clears itself.
#[derive(Debug, Default)]
pub struct ColorSystem {
    /// Keyed by the raw point string, before normalization.
    colors: HashMap<String, &'static ColorDefinition>,
    ordinals: OrdinalCache,
}

impl ColorSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of a point. Once resolved it never changes until the cache is cleared.
    pub fn resolve_color(&mut self, point: &str) -> &'static ColorDefinition {
        if point.is_empty() {
            return colors::default_color();
        }
        if let Some(&color) = self.colors.get(point) {
            return color;
        }
        let color = colors::point_color(point);
        tracing::debug!("Resolved point {point:?} to {}", color.name);
        self.colors.insert(point.to_owned(), color);
        color
    }

    pub fn assign_ordinals<S: AsRef<str>>(&mut self, points: &[S]) -> HashMap<String, u32> {
        self.ordinals.assign(points)
    }

    pub fn get_ordinal(&self, point: &str) -> Option<u32> {
        self.ordinals.get(point)
    }

    /// Style of a cell badge for a party in `role`, bordered with the color of
    /// the point observing the cell or a neutral gray when none does.
    pub fn compose_badge_style(
        &mut self,
        cell_id: &str,
        role: Role,
        records: &[CellRecord],
    ) -> String {
        let border = cells::map_cell_to_point(cell_id, records).map(|p| self.resolve_color(p));
        badge::compose(role, border)
    }

    /// Legend badge for the point itself.
    pub fn point_badge_style(&mut self, point: &str) -> String {
        badge::point_badge(self.resolve_color(point))
    }

    pub fn clear_color_cache(&mut self) {
        self.colors.clear();
    }

    pub fn clear_ordinal_cache(&mut self) {
        self.ordinals.clear();
    }

    pub fn clear_all_caches(&mut self) {
        let stats = self.stats();
        self.clear_color_cache();
        self.clear_ordinal_cache();
        tracing::info!(
            "Cleared point caches ({} colors, {} ordinals)",
            stats.colors,
            stats.ordinals
        );
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            colors: self.colors.len(),
            ordinals: self.ordinals.len(),
            highest_ordinal: self.ordinals.highest(),
        }
    }
}
