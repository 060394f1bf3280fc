mod load;
mod table;
mod types;

pub use load::LoadedConfig;
pub use table::SheetTable;
pub use types::{
    ALPHA_THRESHOLD, CELL_MARGIN, CellboxConfig, DetectConfig, GRID_ROWS, MIN_PIXELS, SheetSpec,
    default_sheets,
};
