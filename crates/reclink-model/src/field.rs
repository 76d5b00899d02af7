//! Logical field and query type enumerations.
//!
//! Every source column that matters for linkage resolves to one of the
//! [`FieldType`] variants. All fields except [`FieldType::CustomerName`]
//! participate in anchor propagation; names are only usable for fuzzy
//! phase-1 matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Logical meaning of a source column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Company tax registration number.
    TaxNo,
    /// Personal identity card number.
    IdNo,
    /// Vehicle chassis (VIN) number.
    ChassisNo,
    /// Vehicle engine number.
    EngineNo,
    /// Telephone number.
    Tel,
    /// Vehicle number plate.
    NumberPlate,
    /// Customer display name. Not an anchor field.
    CustomerName,
    /// Internal customer code.
    CustomerCode,
}

impl FieldType {
    /// All field types, in canonical order.
    pub const ALL: [FieldType; 8] = [
        FieldType::TaxNo,
        FieldType::IdNo,
        FieldType::ChassisNo,
        FieldType::EngineNo,
        FieldType::Tel,
        FieldType::NumberPlate,
        FieldType::CustomerName,
        FieldType::CustomerCode,
    ];

    /// The seven fields that accumulate into the anchor store.
    pub const PROPAGATING: [FieldType; 7] = [
        FieldType::TaxNo,
        FieldType::IdNo,
        FieldType::ChassisNo,
        FieldType::EngineNo,
        FieldType::Tel,
        FieldType::NumberPlate,
        FieldType::CustomerCode,
    ];

    /// Canonical snake_case name, matching the mapping profile vocabulary.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::TaxNo => "tax_no",
            FieldType::IdNo => "id_no",
            FieldType::ChassisNo => "chassis_no",
            FieldType::EngineNo => "engine_no",
            FieldType::Tel => "tel",
            FieldType::NumberPlate => "number_plate",
            FieldType::CustomerName => "customer_name",
            FieldType::CustomerCode => "customer_code",
        }
    }

    /// True for fields whose normalized values feed the anchor store.
    #[must_use]
    pub fn propagates(&self) -> bool {
        !matches!(self, FieldType::CustomerName)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "tax_no" => Ok(FieldType::TaxNo),
            "id_no" => Ok(FieldType::IdNo),
            "chassis_no" => Ok(FieldType::ChassisNo),
            "engine_no" => Ok(FieldType::EngineNo),
            "tel" => Ok(FieldType::Tel),
            "number_plate" => Ok(FieldType::NumberPlate),
            "customer_name" => Ok(FieldType::CustomerName),
            "customer_code" => Ok(FieldType::CustomerCode),
            other => Err(ModelError::UnknownFieldType(other.to_string())),
        }
    }
}

/// What kind of value the seed query is.
///
/// [`QueryType::Auto`] tries the structured identifier types first and the
/// fuzzy name match last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Tax,
    Id,
    Tel,
    Chassis,
    Engine,
    Name,
    Auto,
}

impl QueryType {
    /// Canonical lowercase name, matching the CLI vocabulary.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Tax => "tax",
            QueryType::Id => "id",
            QueryType::Tel => "tel",
            QueryType::Chassis => "chassis",
            QueryType::Engine => "engine",
            QueryType::Name => "name",
            QueryType::Auto => "auto",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "tax" => Ok(QueryType::Tax),
            "id" => Ok(QueryType::Id),
            "tel" => Ok(QueryType::Tel),
            "chassis" => Ok(QueryType::Chassis),
            "engine" => Ok(QueryType::Engine),
            "name" => Ok(QueryType::Name),
            "auto" => Ok(QueryType::Auto),
            other => Err(ModelError::UnknownQueryType(other.to_string())),
        }
    }
}
