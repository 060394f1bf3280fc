use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use cellbox::CellboxError;
use cellbox::cli::CliArgs;
use cellbox::config::{DetectConfig, LoadedConfig, SheetTable};
use cellbox::output::write_json;
use cellbox::sheet::{SheetInput, SheetProcessor, scan_sheets};

#[allow(clippy::print_stderr)]
fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            // Use eprintln instead of error! because logger may not be initialized
            // (e.g., config loading fails before logger init)
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one sheet failed.
fn run() -> Result<bool> {
    let args = CliArgs::parse();

    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Cellbox sprite detector v{}", env!("CARGO_PKG_VERSION"));

    if merged.inputs.is_empty() {
        return Err(CellboxError::NoSheets.into());
    }

    let processor = SheetProcessor::from_config(&merged.detect)?;
    let report = scan_sheets(&merged.inputs, &merged.table, &processor);

    write_json(&report.sheets, merged.output.as_deref())?;
    if let Some(path) = &merged.output {
        info!("Wrote {}", path.display());
    }

    if !report.is_success() {
        error!(
            "{} of {} sheets failed:",
            report.failures.len(),
            merged.inputs.len()
        );
        for (name, e) in &report.failures {
            error!("  {}: {}", name, e);
        }
        return Ok(false);
    }

    info!("Done!");

    Ok(true)
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    inputs: Vec<SheetInput>,
    output: Option<PathBuf>,
    table: SheetTable,
    detect: DetectConfig,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    let mut loaded = if let Some(config_path) = &args.config {
        LoadedConfig::load(config_path)
            .with_context(|| format!("failed to load config: {}", config_path.display()))?
    } else {
        LoadedConfig::current_dir()
    };

    // Input directory: CLI > config > default. A CLI directory is taken as
    // given, not relative to the config file.
    if let Some(dir) = &args.input_dir {
        loaded.config.input_dir = std::env::current_dir()
            .context("failed to read current directory")?
            .join(dir)
            .to_string_lossy()
            .into_owned();
    }

    // Column table: config (or built-in) entries, then CLI overrides and additions
    let mut table = SheetTable::new(&loaded.config.sheets).context("invalid sheet table")?;
    for column in &args.columns {
        table.set(&column.name, column.columns);
    }

    // Inputs: CLI args override config
    let inputs = if !args.input.is_empty() {
        args.input.iter().cloned().map(SheetInput::from_path).collect()
    } else {
        loaded
            .resolve_inputs(&table)
            .context("failed to resolve input sheets from config")?
    };

    // Output: CLI > config > stdout
    let output = args.output.clone().or_else(|| loaded.resolve_output());

    // Detection parameters: CLI > config > default
    let mut detect = loaded.config.detect;
    if let Some(rows) = args.rows {
        detect.rows = rows;
    }
    if let Some(min_pixels) = args.min_pixels {
        detect.min_pixels = min_pixels;
    }
    if let Some(margin) = args.margin {
        detect.margin = margin;
    }
    if let Some(threshold) = args.alpha_threshold {
        detect.alpha_threshold = threshold;
    }

    Ok(MergedConfig {
        inputs,
        output,
        table,
        detect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbox::BoundingBox;
    use cellbox::config::{CELL_MARGIN, GRID_ROWS, MIN_PIXELS};
    use image::{Rgba, RgbaImage};

    fn args(extra: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("cellbox").chain(extra.iter().copied()))
    }

    #[test]
    fn test_columns_flag_adds_sheet_to_input_dir_scan() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = RgbaImage::new(600, 800);
        for y in 20..60 {
            for x in 220..260 {
                img.put_pixel(x, y, Rgba([10, 10, 10, 255]));
            }
        }
        img.save(dir.path().join("capes.png")).unwrap();

        let dir_arg = dir.path().to_string_lossy().into_owned();
        let merged = merge_config_with_args(&args(&["-i", &dir_arg, "--columns", "capes=3"]))
            .unwrap();

        let capes = merged
            .inputs
            .iter()
            .find(|input| input.name == "capes")
            .unwrap();
        assert_eq!(capes.path, dir.path().join("capes.png"));
        assert_eq!(merged.inputs.len(), 9);

        let processor = SheetProcessor::from_config(&merged.detect).unwrap();
        let report = scan_sheets(&merged.inputs, &merged.table, &processor);
        let (_, capes) = report
            .sheets
            .iter()
            .find(|(name, _)| name == "capes")
            .unwrap();
        assert_eq!(
            capes.grid[0],
            vec![BoundingBox {
                x: 220,
                y: 20,
                w: 40,
                h: 40
            }]
        );
        // The eight built-in sheets are missing from the directory
        assert_eq!(report.failures.len(), 8);
    }

    #[test]
    fn test_cli_overrides_config_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sheets.cellbox");
        std::fs::write(
            &config_path,
            r#"{
                "input_dir": "assets",
                "sheets": [{"name": "rings", "columns": 4}],
                "output": "boxes.json",
                "rows": 4,
                "margin": 2
            }"#,
        )
        .unwrap();
        let config_arg = config_path.to_string_lossy().into_owned();

        let merged = merge_config_with_args(&args(&[
            "-c",
            &config_arg,
            "--margin",
            "6",
            "--columns",
            "rings=5",
        ]))
        .unwrap();

        // CLI wins over config
        assert_eq!(merged.detect.margin, 6);
        assert_eq!(merged.table.columns("rings").unwrap().get(), 5);
        // Config wins over default
        assert_eq!(merged.detect.rows, 4);
        assert_ne!(merged.detect.rows, GRID_ROWS);
        assert_eq!(merged.output, Some(dir.path().join("boxes.json")));
        assert_eq!(
            merged.inputs,
            vec![SheetInput {
                name: "rings".to_string(),
                path: dir.path().join("assets").join("rings.png"),
            }]
        );
        // Defaults fill the rest
        assert_eq!(merged.detect.min_pixels, MIN_PIXELS);
        assert!(merged.table.columns("helmets").is_err());
    }

    #[test]
    fn test_defaults_without_config() {
        let merged = merge_config_with_args(&args(&["rings.png", "-o", "out.json"])).unwrap();

        assert_eq!(merged.detect, DetectConfig::default());
        assert_eq!(merged.detect.margin, CELL_MARGIN);
        assert_eq!(merged.inputs, vec![SheetInput::from_path("rings.png")]);
        assert_eq!(merged.output, Some(PathBuf::from("out.json")));
        assert_eq!(merged.table.columns("gloves").unwrap().get(), 5);
    }
}
