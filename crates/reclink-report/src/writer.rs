//! Session result writers.
//!
//! Output layout, under `<out_base>/<query-slug>/`:
//!
//! - `per_file/<source-stem>__matches.csv`: one file per source, original
//!   columns plus `_file`, `_match_reason`, `_phase`; header-only when the
//!   source had no matches.
//! - `combined_matches.csv`: every match record, columns unioned across
//!   sources in first-seen record order.
//! - `summary.csv`: per-source phase1/phase2/total counts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use reclink_model::{MatchRecord, SessionResult, Source};

use crate::slug::query_slug;

/// Columns appended to every match row.
const META_COLUMNS: [&str; 3] = ["_file", "_match_reason", "_phase"];

/// Paths of everything one session wrote.
#[derive(Debug, Clone)]
pub struct SessionOutputs {
    /// The per-query output folder.
    pub folder: PathBuf,
    /// Per-source match files, keyed by source name.
    pub per_source: BTreeMap<String, PathBuf>,
    /// The combined matches file.
    pub combined: PathBuf,
    /// The per-source counts file.
    pub summary: PathBuf,
}

/// Writes all result files for one session.
pub fn write_session_outputs(
    out_base: &Path,
    query: &str,
    sources: &[Source],
    result: &SessionResult,
) -> Result<SessionOutputs> {
    let folder = out_base.join(query_slug(query));
    let per_file_folder = folder.join("per_file");
    std::fs::create_dir_all(&per_file_folder)
        .with_context(|| format!("create output folder {}", per_file_folder.display()))?;

    let mut per_source = BTreeMap::new();
    for source in sources {
        let path = per_file_folder.join(per_source_file_name(source.name()));
        write_source_matches(&path, source, result)
            .with_context(|| format!("write {}", path.display()))?;
        per_source.insert(source.name().to_string(), path);
    }

    let combined = folder.join("combined_matches.csv");
    write_combined_matches(&combined, sources, result)
        .with_context(|| format!("write {}", combined.display()))?;

    let summary = folder.join("summary.csv");
    write_summary(&summary, sources, result)
        .with_context(|| format!("write {}", summary.display()))?;

    info!(
        folder = %folder.display(),
        sources = sources.len(),
        matches = result.total_matches(),
        "session outputs written"
    );
    Ok(SessionOutputs {
        folder,
        per_source,
        combined,
        summary,
    })
}

fn per_source_file_name(source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or(source_name);
    format!("{stem}__matches.csv")
}

fn record_row(record: &MatchRecord, columns: &[String]) -> Vec<String> {
    let mut row: Vec<String> = columns
        .iter()
        .map(|column| record.values.get(column).cloned().unwrap_or_default())
        .collect();
    row.push(record.source.clone());
    row.push(record.reason.clone());
    row.push(record.phase.as_str().to_string());
    row
}

fn write_source_matches(path: &Path, source: &Source, result: &SessionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut records = result.records_for_source(source.name()).peekable();
    if records.peek().is_none() {
        // No matches: keep the original header so the file is easy to eyeball.
        if !source.columns().is_empty() {
            writer.write_record(source.columns())?;
        }
        writer.flush()?;
        return Ok(());
    }
    let mut header: Vec<String> = source.columns().to_vec();
    header.extend(META_COLUMNS.iter().map(|c| (*c).to_string()));
    writer.write_record(&header)?;
    for record in records {
        writer.write_record(record_row(record, source.columns()))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_combined_matches(path: &Path, sources: &[Source], result: &SessionResult) -> Result<()> {
    let source_columns: BTreeMap<&str, &[String]> = sources
        .iter()
        .map(|source| (source.name(), source.columns()))
        .collect();

    // Union of columns in first-seen record order, so the combined file
    // leads with the columns of whichever source matched first.
    let mut columns: Vec<String> = Vec::new();
    for record in &result.records {
        let Some(record_columns) = source_columns.get(record.source.as_str()) else {
            continue;
        };
        for column in *record_columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    if !result.records.is_empty() {
        let mut header = columns.clone();
        header.extend(META_COLUMNS.iter().map(|c| (*c).to_string()));
        writer.write_record(&header)?;
        for record in &result.records {
            writer.write_record(record_row(record, &columns))?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_summary(path: &Path, sources: &[Source], result: &SessionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["file", "phase1_matches", "phase2_matches", "total_matches"])?;
    for source in sources {
        let counts = result
            .per_source
            .get(source.name())
            .copied()
            .unwrap_or_default();
        writer.write_record([
            source.name().to_string(),
            counts.phase1.to_string(),
            counts.phase2.to_string(),
            counts.total().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
