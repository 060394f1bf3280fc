mod layout;
mod rect;

pub use layout::{GridCell, GridLayout};
pub use rect::CellRect;
