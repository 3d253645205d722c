//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use csvjson::{ConverterConfig, JsonFormat};

/// csvjson: convert CSV files into keyed JSON objects
#[derive(Parser, Debug)]
#[command(name = "csvjson")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file or directory of CSV files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file or directory location (default: same as input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify JSON output
    #[arg(long)]
    pub minify: bool,

    /// Prefix for array columns
    #[arg(long, default_value = csvjson::inference::DEFAULT_ARRAY_PREFIX)]
    pub array_prefix: String,

    /// Separator for array values
    #[arg(long, default_value = csvjson::inference::DEFAULT_ARRAY_SEPARATOR)]
    pub array_separator: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Converter settings selected by the flags.
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig::default()
            .with_array_prefix(self.array_prefix.clone())
            .with_array_separator(self.array_separator.clone())
            .with_format(JsonFormat::from_minify(self.minify))
    }
}
