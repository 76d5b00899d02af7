//! Result writing for reclink sessions.
//!
//! Serializes a [`SessionResult`](reclink_model::SessionResult) to the
//! on-disk layout the CLI presents: per-source match files, a combined
//! matches file, and a counts summary.

pub mod slug;
pub mod writer;

pub use slug::query_slug;
pub use writer::{SessionOutputs, write_session_outputs};
