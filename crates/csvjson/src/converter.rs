//! Main Converter struct and public API.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::inference::ArrayConfig;
use crate::input::{DataTable, Parser};
use crate::output::{write_json_file, JsonFormat};
use crate::schema::ResultSet;
use crate::transform::convert_table;

/// Configuration for a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// How array columns are detected and split.
    pub array: ArrayConfig,
    /// Layout of JSON written by [`Converter::convert_to_file`].
    pub format: JsonFormat,
}

impl ConverterConfig {
    pub fn with_array_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.array.prefix = prefix.into();
        self
    }

    pub fn with_array_separator(mut self, separator: impl Into<String>) -> Self {
        self.array.separator = separator.into();
        self
    }

    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

/// Outcome of converting one file to JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Source CSV file.
    pub input: PathBuf,
    /// Written JSON file.
    pub output: PathBuf,
    /// Data rows read.
    pub rows: usize,
    /// Distinct keys written.
    pub records: usize,
    /// Rows that replaced an earlier row with the same key.
    pub overwritten: usize,
}

/// Converts CSV tables into keyed result sets.
///
/// Holds only configuration, so one instance can be shared across threads
/// converting different tables.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
    parser: Parser,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            parser: Parser::new(),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert an already-parsed table.
    pub fn convert_table(&self, table: &DataTable) -> Result<ResultSet> {
        convert_table(table, &self.config.array).map(|(result, _)| result)
    }

    /// Convert CSV text read from `input`.
    pub fn convert_reader(&self, input: impl Read) -> Result<ResultSet> {
        let table = self.parser.parse_reader(input)?;
        self.convert_table(&table)
    }

    /// Convert CSV text held in memory.
    pub fn convert_str(&self, input: &str) -> Result<ResultSet> {
        self.convert_reader(input.as_bytes())
    }

    /// Convert a CSV file.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<ResultSet> {
        let table = self.parser.parse_file(path)?;
        self.convert_table(&table)
    }

    /// Convert `input` and write the JSON object to `output`.
    ///
    /// Nothing is written if the input fails to convert.
    pub fn convert_to_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        // A bad separator is reported before the input is read.
        self.config.array.validate()?;

        let table = self.parser.parse_file(input)?;
        let (result, stats) = convert_table(&table, &self.config.array)?;
        write_json_file(&result, output, self.config.format)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            records = result.len(),
            "wrote json"
        );

        Ok(ConversionSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows: stats.rows,
            records: result.len(),
            overwritten: stats.overwritten,
        })
    }
}
