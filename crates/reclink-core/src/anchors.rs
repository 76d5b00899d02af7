//! The anchor store.
//!
//! Accumulates, per propagating field, every normalized identifier value
//! seen on a phase-1-matched row. The store only grows during phase 1 and
//! is read-only input for phase 2; there is no removal operation.

use std::collections::{BTreeMap, BTreeSet};

use reclink_model::FieldType;

use crate::extract::IdentifierSet;

/// Accumulated anchor values per field.
#[derive(Debug, Clone, Default)]
pub struct AnchorStore {
    values: BTreeMap<FieldType, BTreeSet<String>>,
}

impl AnchorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every non-empty identifier of a matched row.
    pub fn observe(&mut self, ids: &IdentifierSet) {
        for (field, value) in ids.iter() {
            self.values
                .entry(field)
                .or_default()
                .insert(value.to_string());
        }
    }

    /// True if `value` was anchored for `field`.
    #[must_use]
    pub fn contains(&self, field: FieldType, value: &str) -> bool {
        self.values
            .get(&field)
            .is_some_and(|set| set.contains(value))
    }

    /// Anchor count for one field.
    #[must_use]
    pub fn count(&self, field: FieldType) -> usize {
        self.values.get(&field).map_or(0, BTreeSet::len)
    }

    /// Counts for all propagating fields, including zeroes.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<FieldType, usize> {
        FieldType::PROPAGATING
            .into_iter()
            .map(|field| (field, self.count(field)))
            .collect()
    }

    /// Total anchors across all fields.
    #[must_use]
    pub fn total(&self) -> usize {
        self.values.values().map(BTreeSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
