//! Match records and session results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldType;
use crate::source::RowKey;

/// Which scan produced a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    /// Direct match against the seed query.
    Phase1,
    /// Link match through a shared anchor identifier.
    Phase2,
}

impl MatchPhase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPhase::Phase1 => "phase1",
            MatchPhase::Phase2 => "phase2",
        }
    }
}

/// One matched row with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Name of the source the row came from.
    pub source: String,
    /// Row ordinal within the source.
    pub row: usize,
    /// Original cell values keyed by column name.
    pub values: BTreeMap<String, String>,
    /// Reason code explaining which rule fired, e.g. `tax_exact`,
    /// `link_chassis`, `name_fuzzy(92)`.
    pub reason: String,
    /// Scan that produced the match.
    pub phase: MatchPhase,
}

impl MatchRecord {
    /// The deduplication key for this record.
    #[must_use]
    pub fn key(&self) -> RowKey {
        RowKey::new(self.source.clone(), self.row)
    }
}

/// Per-source match counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub phase1: usize,
    pub phase2: usize,
}

impl SourceCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.phase1 + self.phase2
    }
}

/// Everything a completed match session hands to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Matched rows in execution order (phase-1 records precede phase-2
    /// records; no ordering is promised across sources).
    pub records: Vec<MatchRecord>,
    /// Final anchor store size per propagating field.
    pub anchor_counts: BTreeMap<FieldType, usize>,
    /// Match counts per source, including sources with zero matches.
    pub per_source: BTreeMap<String, SourceCounts>,
}

impl SessionResult {
    /// Records belonging to one source, in execution order.
    pub fn records_for_source<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = &'a MatchRecord> {
        self.records.iter().filter(move |record| record.source == source)
    }

    /// Total matches across all sources.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.records.len()
    }

    /// Total anchors accumulated across all fields.
    #[must_use]
    pub fn total_anchors(&self) -> usize {
        self.anchor_counts.values().sum()
    }
}
