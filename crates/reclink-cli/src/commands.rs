//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use tracing::{error, info, info_span, warn};

use reclink_cli::logging::redact_value;
use reclink_core::run_match_session;
use reclink_ingest::{list_csv_files, load_mapping_profile, read_csv_source};
use reclink_model::{QueryType, Source};

use crate::cli::{BatchArgs, ScanArgs, SearchArgs};
use crate::summary::print_search_summary;
use crate::types::{BatchOutcome, SearchOutcome};

pub fn run_search(args: &SearchArgs) -> Result<SearchOutcome> {
    let query = args.query.trim();
    ensure!(!query.is_empty(), "query must not be empty");
    search(query, args.query_type.into(), &args.scan)
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let queries = read_query_list(&args.query_file)
        .with_context(|| format!("read query list {}", args.query_file.display()))?;
    ensure!(
        !queries.is_empty(),
        "query list {} contains no queries",
        args.query_file.display()
    );

    let total = queries.len();
    let mut completed = 0usize;
    let mut failed = Vec::new();
    for (idx, query) in queries.iter().enumerate() {
        info!(
            query = redact_value(query),
            position = idx + 1,
            total,
            "batch search starting"
        );
        match search(query, args.query_type.into(), &args.scan) {
            Ok(outcome) => {
                print_search_summary(&outcome);
                completed += 1;
            }
            Err(err) => {
                error!(query = redact_value(query), error = %err, "batch search failed");
                failed.push(query.clone());
            }
        }
    }

    Ok(BatchOutcome {
        total,
        completed,
        failed,
    })
}

fn search(query: &str, query_type: QueryType, scan: &ScanArgs) -> Result<SearchOutcome> {
    let search_span = info_span!(
        "search",
        query = redact_value(query),
        query_type = %query_type
    );
    let _search_guard = search_span.enter();

    let profile = load_mapping_profile(&scan.mapping_file)?;
    let files = list_csv_files(&scan.data_dir)?;
    if files.is_empty() {
        warn!(data_dir = %scan.data_dir.display(), "no csv files found");
    }

    // A source that fails to parse is skipped; the rest of the session
    // must not be affected.
    let mut sources: Vec<Source> = Vec::with_capacity(files.len());
    let mut source_errors = Vec::new();
    for path in &files {
        match read_csv_source(path) {
            Ok(source) => sources.push(source),
            Err(err) => {
                error!(path = %path.display(), error = %err, "skipping unreadable source");
                source_errors.push(format!("{}: {err}", path.display()));
            }
        }
    }

    let result = run_match_session(&sources, query, query_type, &profile);

    let outputs = if scan.dry_run {
        None
    } else {
        Some(
            reclink_report::write_session_outputs(&scan.output_dir, query, &sources, &result)
                .context("write session outputs")?,
        )
    };

    info!(
        sources = sources.len(),
        matches = result.total_matches(),
        anchors = result.total_anchors(),
        "search complete"
    );
    Ok(SearchOutcome {
        query: query.to_string(),
        query_type,
        result,
        outputs,
        source_errors,
    })
}

fn read_query_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn query_list_skips_blanks_and_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.txt");
        fs::write(&path, "# header\n0305311225\n\n  3502522319  \n").unwrap();
        let queries = read_query_list(&path).unwrap();
        assert_eq!(queries, vec!["0305311225", "3502522319"]);
    }

    #[test]
    fn search_skips_unreadable_sources_and_still_matches() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(
            data_dir.join("customers.csv"),
            "Tax Reg No DMS,Tel\n0305311225,0912345678\n",
        )
        .unwrap();

        let scan = ScanArgs {
            data_dir,
            mapping_file: dir.path().join("missing-mapping.json"),
            output_dir: dir.path().join("out"),
            dry_run: true,
        };
        let outcome = search("0305311225", QueryType::Tax, &scan).unwrap();
        assert_eq!(outcome.result.total_matches(), 1);
        assert!(outcome.outputs.is_none());
        assert!(!outcome.has_errors());
    }
}
