//! Two-phase identifier-propagation matching engine.
//!
//! Given already-parsed [`Source`](reclink_model::Source) tables, a seed
//! query, and a mapping profile, the engine finds rows that match the query
//! directly (phase 1), collects the identifiers those rows carry into an
//! anchor store, and then pulls in every further row that shares at least
//! one anchored identifier (phase 2), across sources that may not contain
//! the original query field at all. Every match carries a reason code.
//!
//! File discovery, parsing, and result writing live in the ingest and
//! report crates; this crate is pure in-memory computation.

pub mod anchors;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod session;

pub use anchors::AnchorStore;
pub use extract::{IdentifierSet, extract_identifiers};
pub use matcher::{NAME_MATCH_THRESHOLD, match_primary, match_secondary, token_sort_ratio};
pub use session::run_match_session;
