//! Outcome types shared between commands and summary printing.

use reclink_model::{QueryType, SessionResult};
use reclink_report::SessionOutputs;

/// Everything one search produced, for summary printing and exit codes.
pub struct SearchOutcome {
    pub query: String,
    pub query_type: QueryType,
    pub result: SessionResult,
    /// `None` on a dry run.
    pub outputs: Option<SessionOutputs>,
    /// Sources that could not be read; they were skipped, not fatal.
    pub source_errors: Vec<String>,
}

impl SearchOutcome {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.source_errors.is_empty()
    }
}

/// Tally of a batch run.
pub struct BatchOutcome {
    pub total: usize,
    pub completed: usize,
    /// Queries whose search failed outright.
    pub failed: Vec<String>,
}

impl BatchOutcome {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }
}
