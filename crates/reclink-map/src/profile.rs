//! Static mapping profile.
//!
//! The profile carries explicit column-to-field overrides per source, keyed
//! by source name. It is typically loaded from a JSON document of the shape:
//!
//! ```json
//! {
//!   "mapping_per_file": {
//!     "customers.csv": { "MaSoThue": "tax_no", "SDT": "tel" }
//!   }
//! }
//! ```
//!
//! Loading from disk is the ingest crate's concern; this type only defines
//! the resolved shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use reclink_model::FieldType;

/// Explicit column→field overrides for a set of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingProfile {
    /// Overrides keyed by source name, then by physical column name.
    #[serde(default, rename = "mapping_per_file")]
    pub per_source: BTreeMap<String, BTreeMap<String, FieldType>>,
}

impl MappingProfile {
    /// Overrides for one source, if any were configured.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&BTreeMap<String, FieldType>> {
        self.per_source.get(name)
    }

    /// Number of sources with explicit overrides.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.per_source.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_source.is_empty()
    }
}
