//! Column-map resolution.
//!
//! For one source, resolution combines two stages with fixed precedence:
//! explicit profile overrides first, then keyword heuristics over the
//! remaining columns in source column order. The resulting [`ColumnMap`]
//! preserves that entry order, and value lookup returns the first mapped
//! column whose cell is non-empty; two columns may legitimately map to the
//! same field in messy source data.

use reclink_model::{FieldType, Source};

use crate::profile::MappingProfile;

/// One resolved column→field entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Physical column name. Explicit entries may name columns absent from
    /// the source; those stay inert during lookup.
    pub column: String,
    /// Logical field the column supplies.
    pub field: FieldType,
}

/// Ordered column→field mapping for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<MapEntry>,
}

impl ColumnMap {
    /// Resolves the mapping for one source.
    ///
    /// Explicit overrides from the profile come first (in lexicographic
    /// column order; JSON objects carry no order of their own), then every
    /// column not already mapped is tested against the keyword table in
    /// source column order. Columns matching nothing remain unmapped.
    #[must_use]
    pub fn resolve(source_name: &str, columns: &[String], profile: &MappingProfile) -> Self {
        let mut entries: Vec<MapEntry> = Vec::new();
        if let Some(overrides) = profile.source(source_name) {
            for (column, &field) in overrides {
                entries.push(MapEntry {
                    column: column.clone(),
                    field,
                });
            }
        }
        for column in columns {
            if entries.iter().any(|entry| &entry.column == column) {
                continue;
            }
            if let Some(field) = infer_field(column) {
                entries.push(MapEntry {
                    column: column.clone(),
                    field,
                });
            }
        }
        Self { entries }
    }

    /// Resolved entries in precedence order.
    #[must_use]
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field a column resolved to, if any.
    #[must_use]
    pub fn field_for(&self, column: &str) -> Option<FieldType> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.field)
    }

    /// Raw value of the first mapped column whose cell is non-empty.
    ///
    /// Iterates entries in precedence order, considering only entries whose
    /// field is in `targets` and whose column exists in the source. Cells
    /// that are empty after trimming are skipped. The returned value is the
    /// raw cell; normalization is the caller's concern.
    #[must_use]
    pub fn first_value<'a>(
        &self,
        source: &'a Source,
        row: usize,
        targets: &[FieldType],
    ) -> Option<&'a str> {
        for entry in &self.entries {
            if !targets.contains(&entry.field) || !source.has_column(&entry.column) {
                continue;
            }
            let value = source.cell(row, &entry.column);
            if !value.trim().is_empty() {
                return Some(value);
            }
        }
        None
    }
}

/// Infers a logical field from a physical column name.
///
/// The column name is lowercased and stripped of spaces, underscores, and
/// periods, then tested against a fixed keyword table. The first rule that
/// matches wins; a column matches at most one field.
#[must_use]
pub fn infer_field(column: &str) -> Option<FieldType> {
    let key = normalize_column_key(column);
    if key == "dmsidcardno" {
        Some(FieldType::IdNo)
    } else if key == "taxregnodms" {
        Some(FieldType::TaxNo)
    } else if key.contains("chassis") {
        Some(FieldType::ChassisNo)
    } else if key.contains("engine") {
        Some(FieldType::EngineNo)
    } else if matches!(key.as_str(), "tel" | "telephone" | "phone") || key.contains("mobile") {
        Some(FieldType::Tel)
    } else if key.contains("numberplate") || key.contains("plate") {
        Some(FieldType::NumberPlate)
    } else if key.contains("customername") {
        Some(FieldType::CustomerName)
    } else if key.contains("customercode") {
        Some(FieldType::CustomerCode)
    } else {
        None
    }
}

/// Lowercases and strips spaces, underscores, and periods.
fn normalize_column_key(column: &str) -> String {
    column
        .to_lowercase()
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '.'))
        .collect()
}
