//! CSV reader producing an in-memory table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use super::source::DataTable;

const UTF8_BOM: char = '\u{feff}';

/// Reads comma-separated data with a header row.
///
/// Every data row must have exactly as many fields as the header; a row
/// that does not is reported as a CSV error and nothing is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
        let table = self.parse_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed csv"
        );
        Ok(table)
    }

    /// Parse CSV text from any reader.
    pub fn parse_reader(&self, input: impl Read) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(input);

        let mut headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if let Some(first) = headers.first_mut() {
            if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
                *first = stripped.to_string();
            }
        }

        if headers.is_empty() {
            return Err(ConvertError::MissingKeyColumn(
                "input has no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows))
    }
}
