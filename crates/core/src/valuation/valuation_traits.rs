use rust_decimal::Decimal;

use crate::errors::Result;
use crate::valuation::valuation_model::{PropertyType, ValuationInput, ValuationResult};

/// Trait for valuation service operations
pub trait ValuationServiceTrait: Send + Sync {
    /// Values a property whose input already passed contract validation.
    fn valuate(&self, input: &ValuationInput) -> Result<ValuationResult>;
    fn base_rate(&self, property_type: PropertyType) -> Decimal;
    fn depreciation(&self, age_years: i64) -> Result<Decimal>;
}
