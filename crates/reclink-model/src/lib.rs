//! Data model for the reclink record-linkage engine.
//!
//! This crate holds the vocabulary shared by every other crate in the
//! workspace: logical field types, in-memory source tables, row identity,
//! and the match records a session produces. It contains no matching logic.

pub mod error;
pub mod field;
pub mod record;
pub mod source;

pub use error::{ModelError, Result};
pub use field::{FieldType, QueryType};
pub use record::{MatchPhase, MatchRecord, SessionResult, SourceCounts};
pub use source::{RowKey, Source};
