pub mod badge;
pub mod colors;
pub mod legend;
pub mod table;
pub mod view;
