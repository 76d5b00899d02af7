//! Field value normalization.
//!
//! One pure function per field kind. Every function maps missing, empty, or
//! whitespace-only input to `""`; empty identifiers never anchor and never
//! match. The rules differ in case sensitivity and separator handling, so
//! they must not be merged: comparing values normalized under different
//! rules silently breaks equality.

use reclink_model::FieldType;

/// Codes (chassis, engine, customer code): trim and uppercase.
#[must_use]
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// ID/tax numbers: strip whitespace, periods, and hyphens; preserve case.
#[must_use]
pub fn normalize_id_number(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '.' | '-'))
        .collect()
}

/// Phone numbers: digits only; a leading international `84` on a number of
/// at least 10 digits becomes the domestic `0` prefix.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 10 && digits.starts_with("84") {
        format!("0{}", &digits[2..])
    } else {
        digits
    }
}

/// Number plates: uppercase, then strip whitespace, periods, and hyphens.
#[must_use]
pub fn normalize_plate(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '.' | '-'))
        .collect()
}

/// Personal names: lowercase, collapse whitespace runs, trim.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a raw value under the rule for its field.
#[must_use]
pub fn normalize_field(field: FieldType, raw: &str) -> String {
    match field {
        FieldType::TaxNo | FieldType::IdNo => normalize_id_number(raw),
        FieldType::ChassisNo | FieldType::EngineNo | FieldType::CustomerCode => {
            normalize_code(raw)
        }
        FieldType::Tel => normalize_phone(raw),
        FieldType::NumberPlate => normalize_plate(raw),
        FieldType::CustomerName => normalize_name(raw),
    }
}
