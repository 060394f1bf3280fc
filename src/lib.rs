pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod grid;
pub mod mask;
pub mod output;
pub mod sheet;

pub use config::{DetectConfig, SheetTable};
pub use detect::{BoundingBox, extract_cell};
pub use error::CellboxError;
pub use grid::{CellRect, GridCell, GridLayout};
pub use mask::{OpacityMask, build_mask};
pub use sheet::{ScanReport, SheetInput, SheetProcessor, SheetResult, scan_sheets};
