mod loader;
mod processor;

pub use loader::{ScanReport, SheetInput, load_sheet, scan_sheets};
pub use processor::{SheetProcessor, SheetResult};
