use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::CellboxError;
use crate::sheet::SheetResult;

/// Sheets keyed by name, serialized in the given order
struct SheetMap<'a>(&'a [(String, SheetResult)]);

impl Serialize for SheetMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, result) in self.0 {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

/// Render sheet results as a pretty-printed JSON object keyed by sheet name
pub fn to_json_string(sheets: &[(String, SheetResult)]) -> Result<String> {
    serde_json::to_string_pretty(&SheetMap(sheets)).context("failed to serialize sheet results")
}

/// Write sheet results to `path`, or to stdout when no path is given
pub fn write_json(sheets: &[(String, SheetResult)], path: Option<&Path>) -> Result<()> {
    let mut json = to_json_string(sheets)?;
    json.push('\n');

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, json).map_err(|e| CellboxError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write results to stdout")?;
        }
    }

    Ok(())
}
