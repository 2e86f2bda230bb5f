//! Valuation domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_AGE_YEARS, MAX_SIZE_SQFT};
use crate::errors::{Error, Result, ValidationError};

pub const SIZE_NOT_POSITIVE: &str = "Property size must be greater than 0";
pub const SIZE_TOO_LARGE: &str = "Property size exceeds maximum allowed (10M sqft)";
pub const AGE_NEGATIVE: &str = "Property age cannot be negative";
pub const AGE_TOO_OLD: &str = "Property age exceeds reasonable limit (200 years)";

/// Commercial property classification. Each variant carries its own rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Multifamily,
    Retail,
    Office,
    Industrial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Multifamily,
        PropertyType::Retail,
        PropertyType::Office,
        PropertyType::Industrial,
    ];

    /// Returns the wire representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Multifamily => "MULTIFAMILY",
            PropertyType::Retail => "RETAIL",
            PropertyType::Office => "OFFICE",
            PropertyType::Industrial => "INDUSTRIAL",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    /// Exact, case-sensitive match on the wire representation.
    fn from_str(s: &str) -> Result<Self> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let accepted = PropertyType::ALL.map(|t| t.as_str()).join(", ");
                ValidationError::InvalidInput(format!(
                    "Invalid property type '{}': expected one of {}",
                    s, accepted
                ))
                .into()
            })
    }
}

/// Validated valuation request.
///
/// The only way to build one is [`ValuationInput::new`] (or
/// [`ValuationInput::parse`]), so holding a value means every range check has
/// already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationInput {
    property_type: PropertyType,
    size_sqft: i64,
    age_years: i64,
}

impl ValuationInput {
    pub fn new(property_type: PropertyType, size_sqft: i64, age_years: i64) -> Result<Self> {
        if size_sqft <= 0 {
            return Err(invalid(SIZE_NOT_POSITIVE));
        }
        if size_sqft > MAX_SIZE_SQFT {
            return Err(invalid(SIZE_TOO_LARGE));
        }
        if age_years < 0 {
            return Err(invalid(AGE_NEGATIVE));
        }
        if age_years > MAX_AGE_YEARS {
            return Err(invalid(AGE_TOO_OLD));
        }
        Ok(Self {
            property_type,
            size_sqft,
            age_years,
        })
    }

    /// Same as [`ValuationInput::new`] but takes the property type as text.
    pub fn parse(property_type: &str, size_sqft: i64, age_years: i64) -> Result<Self> {
        Self::new(property_type.parse()?, size_sqft, age_years)
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn size_sqft(&self) -> i64 {
        self.size_sqft
    }

    pub fn age_years(&self) -> i64 {
        self.age_years
    }
}

fn invalid(message: &str) -> Error {
    ValidationError::InvalidInput(message.to_string()).into()
}

/// Intermediate values of a valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    pub base_value: Decimal,
    pub depreciation_factor: Decimal,
    pub final_value: Decimal,
}

/// Outcome of a single valuation. `estimated_value` always equals
/// `breakdown.final_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimated_value: Decimal,
    pub valuation_timestamp: DateTime<Utc>,
    pub methodology: String,
    pub breakdown: ValuationBreakdown,
}
