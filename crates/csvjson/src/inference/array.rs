//! Reconstruction of array fields from delimited cells.

use crate::error::{ConvertError, Result};
use crate::schema::InferredValue;

use super::scalar::infer;

/// Default column-name prefix marking array columns.
pub const DEFAULT_ARRAY_PREFIX: &str = "JA_";

/// Default separator between array elements.
pub const DEFAULT_ARRAY_SEPARATOR: &str = ",";

/// How array columns are recognised and split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Column-name prefix. An empty prefix makes every column an array column.
    pub prefix: String,
    /// Element separator. Must not be empty.
    pub separator: String,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ARRAY_PREFIX.to_string(),
            separator: DEFAULT_ARRAY_SEPARATOR.to_string(),
        }
    }
}

impl ArrayConfig {
    /// Create an array configuration.
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    /// Check the configuration before any rows are processed.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(ConvertError::Config(
                "array separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The field name for `column` if it is an array column.
    pub fn field_name<'a>(&self, column: &'a str) -> Option<&'a str> {
        column.strip_prefix(self.prefix.as_str())
    }
}

/// An array field rebuilt from one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayField<'a> {
    /// Column name with the prefix removed.
    pub name: &'a str,
    /// Inferred elements in split order. Never empty.
    pub values: Vec<InferredValue>,
}

/// Rebuild an array field from `raw` if `column` carries the array prefix.
///
/// Returns `None` when the column is not an array column, and also when no
/// element survives trimming; in both cases the caller produces no array.
/// Use [`ArrayConfig::field_name`] to tell the two apart.
pub fn reconstruct_array<'a>(
    column: &'a str,
    raw: &str,
    config: &ArrayConfig,
) -> Option<ArrayField<'a>> {
    let name = config.field_name(column)?;
    let values = split_values(raw, &config.separator);
    if values.is_empty() {
        return None;
    }
    Some(ArrayField { name, values })
}

/// Split on `separator`, drop blank pieces and infer the rest.
pub fn split_values(raw: &str, separator: &str) -> Vec<InferredValue> {
    raw.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(infer)
        .collect()
}
