//! CSV parsing into in-memory [`Source`] tables.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use reclink_model::Source;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads one CSV file into a [`Source`].
///
/// The first non-empty record supplies the column names (BOM stripped,
/// internal whitespace collapsed). Fully empty records are skipped; data
/// rows are padded or truncated to the header width. The source name is
/// the file name, which keys the mapping profile and all reporting.
pub fn read_csv_source(path: &Path) -> Result<Source> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let name = path
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("unnamed.csv")
        .to_string();

    if raw_rows.is_empty() {
        debug!(source = %name, "csv file has no data");
        return Ok(Source::new(name, Vec::new(), Vec::new()));
    }

    let columns: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }

    debug!(
        source = %name,
        columns = columns.len(),
        rows = rows.len(),
        "csv source loaded"
    );
    Ok(Source::new(name, columns, rows))
}
