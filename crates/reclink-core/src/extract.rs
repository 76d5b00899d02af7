//! Identifier extraction.
//!
//! Turns one row into its full normalized identifier set: for each of the
//! seven propagating fields, the first non-empty mapped cell, normalized
//! under that field's rule.

use std::collections::BTreeMap;

use reclink_map::ColumnMap;
use reclink_model::{FieldType, Source};

use crate::normalize::normalize_field;

/// Normalized identifiers of one row.
///
/// Only non-empty values are stored; [`IdentifierSet::get`] reads absent
/// fields as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    values: BTreeMap<FieldType, String>,
}

impl IdentifierSet {
    /// Normalized value for a field, `""` when the row has none.
    #[must_use]
    pub fn get(&self, field: FieldType) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Non-empty (field, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FieldType, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// True when the row carried no usable identifier at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(FieldType, &str)]) -> Self {
        let mut values = BTreeMap::new();
        for (field, value) in pairs {
            if !value.is_empty() {
                values.insert(*field, (*value).to_string());
            }
        }
        Self { values }
    }
}

/// Extracts the normalized identifier set of one row.
#[must_use]
pub fn extract_identifiers(map: &ColumnMap, source: &Source, row: usize) -> IdentifierSet {
    let mut values = BTreeMap::new();
    for field in FieldType::PROPAGATING {
        let Some(raw) = map.first_value(source, row, &[field]) else {
            continue;
        };
        let normalized = normalize_field(field, raw);
        if !normalized.is_empty() {
            values.insert(field, normalized);
        }
    }
    IdentifierSet { values }
}
