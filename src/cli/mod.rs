mod args;

pub use args::{CliArgs, ColumnOverride};
