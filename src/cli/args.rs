use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cellbox")]
#[command(version, about = "Detect per-cell sprite bounding boxes in grid sprite sheets", long_about = None)]
pub struct CliArgs {
    /// Sheet images; the file stem selects the column count (rings.png -> rings)
    pub input: Vec<PathBuf>,

    /// Load settings from a .cellbox config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding <sheet>.png files when no inputs are given [default: .]
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output JSON file [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Grid rows per sheet [default: 8]
    #[arg(long)]
    pub rows: Option<u32>,

    /// Minimum opaque pixels for a cell to count as occupied [default: 50]
    #[arg(long)]
    pub min_pixels: Option<usize>,

    /// Pixels trimmed from each cell edge before detection [default: 8]
    #[arg(long)]
    pub margin: Option<u32>,

    /// Alpha values at or below this are transparent [default: 100]
    #[arg(long)]
    pub alpha_threshold: Option<u8>,

    /// Column count for a sheet, overriding the built-in table (e.g. capes=6)
    #[arg(long = "columns", value_name = "NAME=N", value_parser = parse_column_override)]
    pub columns: Vec<ColumnOverride>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// A `NAME=N` column count from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOverride {
    pub name: String,
    pub columns: NonZeroU32,
}

fn parse_column_override(s: &str) -> Result<ColumnOverride, String> {
    let (name, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=N, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing sheet name in '{}'", s));
    }
    let columns = count
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_e| format!("column count must be a positive integer, got '{}'", count))?;
    Ok(ColumnOverride {
        name: name.to_string(),
        columns,
    })
}
