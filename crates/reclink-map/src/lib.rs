//! Schema mapping for reclink sources.
//!
//! Resolves, for one source's column set, which physical column supplies
//! each logical field. Explicit profile overrides always win over the
//! keyword heuristics; resolution is deterministic and happens once per
//! source.

pub mod profile;
pub mod resolve;

pub use profile::MappingProfile;
pub use resolve::{ColumnMap, MapEntry, infer_field};
