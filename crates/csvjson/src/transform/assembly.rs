//! Row-to-record assembly.

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::inference::{infer, reconstruct_array, ArrayConfig};
use crate::input::{DataTable, Row};
use crate::schema::{FieldValue, InferredValue, Record, ResultSet};

/// Counts gathered while assembling a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Data rows processed.
    pub rows: usize,
    /// Rows whose key replaced an earlier row's record.
    pub overwritten: usize,
}

/// Build the key and record for one row.
///
/// The key column's cell is inferred into the key and left out of the
/// record. Every other non-blank cell becomes a field: array columns are
/// split (and dropped if nothing survives), the rest are inferred scalars.
pub fn assemble_record(
    row: &Row<'_>,
    key_column: &str,
    config: &ArrayConfig,
) -> Result<(InferredValue, Record)> {
    let key_cell = row
        .get(key_column)
        .ok_or_else(|| ConvertError::MissingKeyColumn(key_column.to_string()))?;
    let key = infer(key_cell);

    let mut record = Record::new();
    for (column, cell) in row.iter() {
        if column == key_column || cell.trim().is_empty() {
            continue;
        }

        if config.field_name(column).is_some() {
            if let Some(field) = reconstruct_array(column, cell, config) {
                record.insert(field.name.to_string(), FieldValue::Array(field.values));
            }
        } else {
            record.insert(column.to_string(), FieldValue::Scalar(infer(cell)));
        }
    }

    Ok((key, record))
}

/// Convert rows in order, later rows replacing earlier ones with equal keys.
pub fn convert_rows<'a>(
    rows: impl IntoIterator<Item = Row<'a>>,
    key_column: &str,
    config: &ArrayConfig,
) -> Result<(ResultSet, AssemblyStats)> {
    config.validate()?;

    let mut result = ResultSet::new();
    let mut stats = AssemblyStats::default();

    for row in rows {
        let (key, record) = assemble_record(&row, key_column, config)?;
        stats.rows += 1;
        if result.insert(key, record).is_some() {
            stats.overwritten += 1;
            debug!(row = stats.rows, "duplicate key, earlier record replaced");
        }
    }

    debug!(
        rows = stats.rows,
        records = result.len(),
        overwritten = stats.overwritten,
        "assembled result set"
    );

    Ok((result, stats))
}

/// Convert a whole table. Fails once, before any row, if there is no header.
pub fn convert_table(table: &DataTable, config: &ArrayConfig) -> Result<(ResultSet, AssemblyStats)> {
    let key_column = table.key_column()?;
    convert_rows(table.iter_rows(), key_column, config)
}
