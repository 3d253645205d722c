//! In-memory table and row views.

use indexmap::IndexMap;

use crate::error::{ConvertError, Result};

/// Represents parsed tabular data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Column headers. The first one is the key column.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Name of the key column.
    pub fn key_column(&self) -> Result<&str> {
        self.headers
            .first()
            .map(|h| h.as_str())
            .ok_or_else(|| ConvertError::MissingKeyColumn("table has no header row".to_string()))
    }

    /// Iterate rows as name-to-cell views.
    pub fn iter_rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row::new(&self.headers, values))
    }
}

/// One data row keyed by column name.
///
/// Built like a dictionary: when a header repeats, the later cell wins and
/// the name keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row<'a> {
    cells: IndexMap<&'a str, &'a str>,
}

impl<'a> Row<'a> {
    /// Pair headers with cell values. Extra values or headers are ignored.
    pub fn new(headers: &'a [String], values: &'a [String]) -> Self {
        headers
            .iter()
            .zip(values)
            .map(|(h, v)| (h.as_str(), v.as_str()))
            .collect()
    }

    /// Raw cell for a column.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.cells.get(column).copied()
    }

    /// Iterate `(column, cell)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.cells.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Row<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut cells = IndexMap::new();
        for (column, cell) in iter {
            cells.insert(column, cell);
        }
        Self { cells }
    }
}
