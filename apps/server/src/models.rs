use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use valuation_core::valuation as core_valuation;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[schema(example = json!({
    "property_type": "MULTIFAMILY",
    "size_sqft": 50000,
    "age_years": 15
}))]
pub struct ValuationRequest {
    /// One of MULTIFAMILY, RETAIL, OFFICE, INDUSTRIAL
    pub property_type: String,
    /// Property size in square feet, 1 to 10,000,000
    pub size_sqft: i64,
    /// Property age in years, 0 to 200
    pub age_years: i64,
}

impl TryFrom<ValuationRequest> for core_valuation::ValuationInput {
    type Error = valuation_core::Error;

    fn try_from(r: ValuationRequest) -> Result<Self, Self::Error> {
        core_valuation::ValuationInput::parse(&r.property_type, r.size_sqft, r.age_years)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ValuationBreakdown {
    #[schema(value_type = f64)]
    pub base_value: Decimal,
    #[schema(value_type = f64)]
    pub depreciation_factor: Decimal,
    #[schema(value_type = f64)]
    pub final_value: Decimal,
}

impl From<core_valuation::ValuationBreakdown> for ValuationBreakdown {
    fn from(b: core_valuation::ValuationBreakdown) -> Self {
        Self {
            base_value: b.base_value,
            depreciation_factor: b.depreciation_factor,
            final_value: b.final_value,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[schema(example = json!({
    "estimated_value": 8500000.00,
    "valuation_timestamp": "2024-12-11T10:30:00Z",
    "methodology": "Base rate ($200/sqft) with 15.0% age depreciation",
    "breakdown": {
        "base_value": 10000000.00,
        "depreciation_factor": 0.15,
        "final_value": 8500000.00
    }
}))]
pub struct ValuationResponse {
    #[schema(value_type = f64)]
    pub estimated_value: Decimal,
    pub valuation_timestamp: DateTime<Utc>,
    pub methodology: String,
    pub breakdown: ValuationBreakdown,
}

impl From<core_valuation::ValuationResult> for ValuationResponse {
    fn from(r: core_valuation::ValuationResult) -> Self {
        Self {
            estimated_value: r.estimated_value,
            valuation_timestamp: r.valuation_timestamp,
            methodology: r.methodology,
            breakdown: r.breakdown.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>, error_code: &str) -> Self {
        Self {
            detail: detail.into(),
            error_code: Some(error_code.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub health: String,
}
