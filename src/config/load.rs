use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SheetTable;
use super::types::CellboxConfig;
use crate::sheet::SheetInput;

const SHEET_EXTENSION: &str = "png";
const CONFIG_VERSION: u32 = 1;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: CellboxConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: CellboxConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if config.version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {} (expected {})",
                config.version,
                path.display(),
                CONFIG_VERSION
            );
        }

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Default configuration rooted at the current directory.
    pub fn current_dir() -> Self {
        Self {
            config: CellboxConfig::default(),
            config_dir: PathBuf::from("."),
        }
    }

    /// Resolve the sheets to process.
    ///
    /// Explicit `input` entries win: glob patterns are expanded and every
    /// path is resolved relative to the config directory, with the file stem
    /// as the sheet name. Otherwise each entry of `table` maps to
    /// `<input_dir>/<name>.png`.
    pub fn resolve_inputs(&self, table: &SheetTable) -> Result<Vec<SheetInput>> {
        if self.config.input.is_empty() {
            let dir = self.config_dir.join(&self.config.input_dir);
            return Ok(table
                .names()
                .map(|name| SheetInput {
                    name: name.to_string(),
                    path: dir.join(format!("{}.{}", name, SHEET_EXTENSION)),
                })
                .collect());
        }

        let mut results = Vec::new();

        for pattern in &self.config.input {
            if is_glob_pattern(pattern) {
                // Resolve glob pattern relative to config dir
                let full_pattern = self.config_dir.join(pattern);
                let pattern_str = full_pattern.to_string_lossy();

                let paths = glob::glob(&pattern_str)
                    .with_context(|| format!("invalid glob pattern: {}", pattern))?;

                for entry in paths {
                    let path =
                        entry.with_context(|| format!("failed to read glob entry: {}", pattern))?;
                    results.push(SheetInput::from_path(path));
                }
            } else {
                results.push(SheetInput::from_path(self.config_dir.join(pattern)));
            }
        }

        Ok(results)
    }

    /// Resolve the output file relative to the config file directory.
    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config
            .output
            .as_ref()
            .map(|output| self.config_dir.join(output))
    }
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
