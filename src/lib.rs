//! Deterministic visual identities for KRONOS HUNTER points.
//!
//! Every scan location ("point") gets a stable color from a fixed 16-entry
//! palette and a small ordinal for compact badges. Operator cells are mapped
//! back to the point that observed them so correlation tables can bind each
//! cell badge to its point.

pub mod config;
pub mod dataset;
pub mod error;
pub mod records;
pub mod state;
pub mod ui;

pub use records::{CellRecord, CorrelationDataset, CorrelationEntry, Role};
pub use state::cells::{map_cell_to_point, points_for_correlation};
pub use state::color_system::{CacheStats, ColorSystem};
pub use state::session::MissionSession;
pub use ui::colors::{hash_point, ColorDefinition, PALETTE};
