//! Primary (phase-1) and secondary (phase-2) row matching.
//!
//! Phase 1 compares one row directly against the seed query. Phase 2
//! compares a row's identifier set against the anchors accumulated from
//! phase-1 matches. Both return the reason code of the first rule that
//! fired, or `None`.

use rapidfuzz::fuzz;

use reclink_map::ColumnMap;
use reclink_model::{FieldType, QueryType, Source};

use crate::anchors::AnchorStore;
use crate::extract::IdentifierSet;
use crate::normalize::{normalize_field, normalize_name};

/// Minimum token-sort similarity for a fuzzy name match.
pub const NAME_MATCH_THRESHOLD: f64 = 85.0;

/// Priority order for `auto` queries. Structured high-specificity
/// identifiers come before the error-prone fuzzy name match.
const AUTO_ORDER: [QueryType; 6] = [
    QueryType::Tax,
    QueryType::Id,
    QueryType::Chassis,
    QueryType::Engine,
    QueryType::Tel,
    QueryType::Name,
];

/// Phase-2 priority order. A row only needs one shared identifier; the
/// order is a tie-break for the reported reason, not for the verdict.
const LINK_ORDER: [(FieldType, &str); 7] = [
    (FieldType::ChassisNo, "link_chassis"),
    (FieldType::EngineNo, "link_engine"),
    (FieldType::NumberPlate, "link_plate"),
    (FieldType::Tel, "link_tel"),
    (FieldType::TaxNo, "link_tax"),
    (FieldType::IdNo, "link_id"),
    (FieldType::CustomerCode, "link_customer_code"),
];

/// Tests one row directly against the seed query.
///
/// Returns the reason code on a match: `<type>_exact` for the structured
/// identifier types, `name_fuzzy(<score>)` for names. An empty query never
/// matches, and neither does a row whose relevant value normalizes to `""`.
#[must_use]
pub fn match_primary(
    source: &Source,
    map: &ColumnMap,
    row: usize,
    query: &str,
    query_type: QueryType,
) -> Option<String> {
    match query_type {
        QueryType::Tax => match_exact(source, map, row, query, FieldType::TaxNo, "tax_exact"),
        QueryType::Id => match_exact(source, map, row, query, FieldType::IdNo, "id_exact"),
        QueryType::Chassis => {
            match_exact(source, map, row, query, FieldType::ChassisNo, "chassis_exact")
        }
        QueryType::Engine => {
            match_exact(source, map, row, query, FieldType::EngineNo, "engine_exact")
        }
        QueryType::Tel => match_exact(source, map, row, query, FieldType::Tel, "tel_exact"),
        QueryType::Name => match_name(source, map, row, query),
        QueryType::Auto => AUTO_ORDER
            .into_iter()
            .find_map(|sub| match_primary(source, map, row, query, sub)),
    }
}

fn match_exact(
    source: &Source,
    map: &ColumnMap,
    row: usize,
    query: &str,
    field: FieldType,
    reason: &str,
) -> Option<String> {
    let query_value = normalize_field(field, query);
    if query_value.is_empty() {
        return None;
    }
    let raw = map.first_value(source, row, &[field])?;
    let row_value = normalize_field(field, raw);
    (!row_value.is_empty() && row_value == query_value).then(|| reason.to_string())
}

fn match_name(source: &Source, map: &ColumnMap, row: usize, query: &str) -> Option<String> {
    let query_name = normalize_name(query);
    if query_name.is_empty() {
        return None;
    }
    let raw = map.first_value(source, row, &[FieldType::CustomerName])?;
    let row_name = normalize_name(raw);
    if row_name.is_empty() {
        return None;
    }
    let score = token_sort_ratio(&row_name, &query_name);
    (score >= NAME_MATCH_THRESHOLD).then(|| format!("name_fuzzy({})", score.round() as i64))
}

/// Tests a row's identifier set against the anchor store.
///
/// Returns the link reason of the first field (in [`LINK_ORDER`]) whose
/// non-empty value is anchored.
#[must_use]
pub fn match_secondary(ids: &IdentifierSet, anchors: &AnchorStore) -> Option<String> {
    for (field, reason) in LINK_ORDER {
        let value = ids.get(field);
        if !value.is_empty() && anchors.contains(field, value) {
            return Some(reason.to_string());
        }
    }
    None
}

/// Token-order-insensitive similarity in [0, 100].
///
/// Sorts each string's whitespace-delimited tokens alphabetically, then
/// computes the normalized indel ratio between the joined results.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(token_sorted(a).chars(), token_sorted(b).chars())
}

fn token_sorted(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
