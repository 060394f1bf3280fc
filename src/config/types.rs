use serde::{Deserialize, Serialize};

/// Rows per sheet
pub const GRID_ROWS: u32 = 8;
/// Minimum opaque pixels for a cell to count as occupied
pub const MIN_PIXELS: usize = 50;
/// Pixels trimmed from each cell edge before detection
pub const CELL_MARGIN: u32 = 8;
/// Alpha values at or below this are transparent
pub const ALPHA_THRESHOLD: u8 = 100;

/// Tunable detection parameters shared by every sheet of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Number of grid rows per sheet
    pub rows: u32,
    /// Minimum opaque pixels per cell and per dominant component
    pub min_pixels: usize,
    /// Inset applied to every cell edge
    pub margin: u32,
    /// Opacity threshold for images with an alpha channel
    pub alpha_threshold: u8,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            min_pixels: MIN_PIXELS,
            margin: CELL_MARGIN,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

/// Column count for one sheet type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub name: String,
    pub columns: u32,
}

impl SheetSpec {
    pub fn new(name: impl Into<String>, columns: u32) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// Known equipment sheets and their column counts
pub fn default_sheets() -> Vec<SheetSpec> {
    [
        ("helmets", 4),
        ("armors", 4),
        ("weapons", 4),
        ("necklaces", 4),
        ("rings", 4),
        ("gloves", 5),
        ("belts", 4),
        ("boots", 4),
    ]
    .into_iter()
    .map(|(name, columns)| SheetSpec::new(name, columns))
    .collect()
}

/// Cellbox configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellboxConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Directory holding `<sheet>.png` files
    pub input_dir: String,
    /// Explicit image paths or glob patterns; sheet names are the file stems.
    /// When empty, every sheet in `sheets` is read from `input_dir`.
    pub input: Vec<String>,
    /// Sheet name to column count table, in output order
    pub sheets: Vec<SheetSpec>,
    /// Output JSON file (stdout when unset)
    pub output: Option<String>,
    /// Detection parameters
    #[serde(flatten)]
    pub detect: DetectConfig,
}

impl Default for CellboxConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input_dir: ".".to_string(),
            input: Vec::new(),
            sheets: default_sheets(),
            output: None,
            detect: DetectConfig::default(),
        }
    }
}
