//! In-memory source tables.
//!
//! A [`Source`] is one already-parsed tabular input: a stable name (usually
//! the file name), an ordered list of column names, and rows of string
//! cells. Sources are immutable for the duration of a match session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One named table of string cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Source {
    /// Builds a source from a name, column names, and rows.
    ///
    /// Rows may be ragged; missing cells read as empty. When two columns
    /// share a name, the first occurrence wins for name-based lookup.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Stable source name, e.g. the file name it was parsed from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in their original order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// True if the source has a column with this exact name.
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell value by row ordinal and column name. Absent cells read as `""`.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> &str {
        let Some(col_idx) = self.columns.iter().position(|name| name == column) else {
            return "";
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col_idx))
            .map_or("", String::as_str)
    }

    /// All cells of a row keyed by column name, for result reporting.
    ///
    /// Duplicate column names collapse to the first occurrence, matching
    /// [`Source::cell`] lookup.
    #[must_use]
    pub fn row_values(&self, row: usize) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for column in &self.columns {
            values
                .entry(column.clone())
                .or_insert_with(|| self.cell(row, column).to_string());
        }
        values
    }
}

/// Identity of a row within a session: source name plus row ordinal.
///
/// This is the deduplication key: a key appears in at most one match
/// record per session.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RowKey {
    pub source: String,
    pub row: usize,
}

impl RowKey {
    #[must_use]
    pub fn new(source: impl Into<String>, row: usize) -> Self {
        Self {
            source: source.into(),
            row,
        }
    }
}
