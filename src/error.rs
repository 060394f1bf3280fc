use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellboxError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unknown sheet '{0}': no column count configured")]
    UnknownSheet(String),

    #[error("Sheet '{0}' must have at least one column")]
    ZeroColumns(String),

    #[error("Grid must have at least one row")]
    ZeroRows,

    #[error("Duplicate sheet '{0}' in column table")]
    DuplicateSheet(String),

    #[error("No sheets to process")]
    NoSheets,

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),
}
