use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use log::{info, warn};
use rayon::prelude::*;

use super::{SheetProcessor, SheetResult};
use crate::config::SheetTable;
use crate::error::CellboxError;

/// A sheet image and the name used to look up its column count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInput {
    pub name: String,
    pub path: PathBuf,
}

impl SheetInput {
    /// Use the file stem as the sheet name (`assets/rings.png` -> `rings`)
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { name, path }
    }
}

/// Outcome of a batch run: successes and failures, both in input order
#[derive(Debug, Default)]
pub struct ScanReport {
    pub sheets: Vec<(String, SheetResult)>,
    pub failures: Vec<(String, CellboxError)>,
}

impl ScanReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode a sheet image from disk
pub fn load_sheet(path: &Path) -> Result<DynamicImage, CellboxError> {
    if !path.exists() {
        return Err(CellboxError::InputNotFound(path.to_path_buf()));
    }

    ImageReader::open(path)
        .map_err(|e| CellboxError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| CellboxError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| CellboxError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Process every input sheet, isolating failures per sheet.
///
/// A sheet whose name has no column count fails before its image is read.
/// Sheets are processed in parallel; the report keeps input order.
pub fn scan_sheets(
    inputs: &[SheetInput],
    table: &SheetTable,
    processor: &SheetProcessor,
) -> ScanReport {
    let mut seen = HashSet::new();
    let duplicates: Vec<bool> = inputs
        .iter()
        .map(|input| !seen.insert(input.name.as_str()))
        .collect();

    info!("Processing {} sheets...", inputs.len());

    let outcomes: Vec<_> = inputs
        .par_iter()
        .zip(duplicates.par_iter())
        .map(|(input, &duplicate)| {
            if duplicate {
                return Err(CellboxError::DuplicateSheet(input.name.clone()));
            }
            scan_single_sheet(input, table, processor)
        })
        .collect();

    let mut report = ScanReport::default();
    for (input, outcome) in inputs.iter().zip(outcomes) {
        match outcome {
            Ok(result) => report.sheets.push((input.name.clone(), result)),
            Err(e) => {
                warn!("Skipping {}: {}", input.name, e);
                report.failures.push((input.name.clone(), e));
            }
        }
    }

    report
}

fn scan_single_sheet(
    input: &SheetInput,
    table: &SheetTable,
    processor: &SheetProcessor,
) -> Result<SheetResult, CellboxError> {
    let columns = table.columns(&input.name)?;
    let image = load_sheet(&input.path)?;

    info!("Processing {} ({} cols)...", input.name, columns);
    let result = processor.process_image(&image, columns);
    info!(
        "Found {} sprites in {} ({}x{})",
        result.sprite_count(),
        input.name,
        result.image_width,
        result.image_height
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_file_stem() {
        let input = SheetInput::from_path("assets/gloves.png");
        assert_eq!(input.name, "gloves");
        assert_eq!(input.path, PathBuf::from("assets/gloves.png"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_sheet(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CellboxError::InputNotFound(_)));
    }
}
