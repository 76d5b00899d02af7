//! Match session orchestration.
//!
//! A session runs two strictly sequential scans over the same sources.
//! Phase 1 matches rows directly against the seed query and accumulates
//! each matched row's identifiers into the anchor store. Phase 2 re-scans
//! every row not matched in phase 1 against the completed anchor store,
//! which is read-only from then on. Anchor mutation is confined to this module;
//! the matchers themselves are pure.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use tracing::{debug, info, info_span};

use reclink_map::{ColumnMap, MappingProfile};
use reclink_model::{
    MatchPhase, MatchRecord, QueryType, RowKey, SessionResult, Source, SourceCounts,
};

use crate::anchors::AnchorStore;
use crate::extract::extract_identifiers;
use crate::matcher::{match_primary, match_secondary};

/// Runs a complete two-phase match session over the given sources.
///
/// Column maps are resolved once per source and reused by both phases.
/// Every source appears in the result's per-source counts, matched or not.
#[must_use]
pub fn run_match_session(
    sources: &[Source],
    query: &str,
    query_type: QueryType,
    profile: &MappingProfile,
) -> SessionResult {
    let session_span = info_span!(
        "match_session",
        query_type = %query_type,
        source_count = sources.len()
    );
    let _session_guard = session_span.enter();

    let maps: Vec<ColumnMap> = sources
        .iter()
        .map(|source| ColumnMap::resolve(source.name(), source.columns(), profile))
        .collect();

    let mut anchors = AnchorStore::new();
    let mut matched: BTreeSet<RowKey> = BTreeSet::new();
    let mut records: Vec<MatchRecord> = Vec::new();
    let mut per_source: BTreeMap<String, SourceCounts> = sources
        .iter()
        .map(|source| (source.name().to_string(), SourceCounts::default()))
        .collect();

    // Phase 1: direct matches against the seed query. Recording a row and
    // observing its identifiers happen together, before the next row is
    // considered.
    info_span!("phase1").in_scope(|| {
        let phase_start = Instant::now();
        for (source, map) in sources.iter().zip(&maps) {
            let scan_start = Instant::now();
            let mut matches = 0usize;
            for row in 0..source.row_count() {
                let Some(reason) = match_primary(source, map, row, query, query_type) else {
                    continue;
                };
                let key = RowKey::new(source.name(), row);
                if !matched.insert(key) {
                    continue;
                }
                anchors.observe(&extract_identifiers(map, source, row));
                records.push(MatchRecord {
                    source: source.name().to_string(),
                    row,
                    values: source.row_values(row),
                    reason,
                    phase: MatchPhase::Phase1,
                });
                matches += 1;
            }
            if let Some(counts) = per_source.get_mut(source.name()) {
                counts.phase1 = matches;
            }
            debug!(
                source = source.name(),
                rows = source.row_count(),
                matches,
                duration_ms = scan_start.elapsed().as_millis(),
                "phase1 scan complete"
            );
        }
        info!(
            matches = records.len(),
            anchors = anchors.total(),
            duration_ms = phase_start.elapsed().as_millis(),
            "phase1 complete"
        );
    });

    // Phase 2: link matches against the frozen anchor store.
    info_span!("phase2").in_scope(|| {
        let phase_start = Instant::now();
        let phase1_total = records.len();
        for (source, map) in sources.iter().zip(&maps) {
            let scan_start = Instant::now();
            let mut matches = 0usize;
            for row in 0..source.row_count() {
                let key = RowKey::new(source.name(), row);
                if matched.contains(&key) {
                    continue;
                }
                let ids = extract_identifiers(map, source, row);
                let Some(reason) = match_secondary(&ids, &anchors) else {
                    continue;
                };
                matched.insert(key);
                records.push(MatchRecord {
                    source: source.name().to_string(),
                    row,
                    values: source.row_values(row),
                    reason,
                    phase: MatchPhase::Phase2,
                });
                matches += 1;
            }
            if let Some(counts) = per_source.get_mut(source.name()) {
                counts.phase2 = matches;
            }
            debug!(
                source = source.name(),
                rows = source.row_count(),
                matches,
                duration_ms = scan_start.elapsed().as_millis(),
                "phase2 scan complete"
            );
        }
        info!(
            matches = records.len() - phase1_total,
            duration_ms = phase_start.elapsed().as_millis(),
            "phase2 complete"
        );
    });

    SessionResult {
        records,
        anchor_counts: anchors.counts(),
        per_source,
    }
}
