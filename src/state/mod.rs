pub mod cells;
pub mod color_system;
pub mod ordinals;
pub mod session;
