use log::{info, warn};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::valuation::valuation_calculator::{
    base_rate_for, calculate_input, depreciation_for, format_currency,
};
use crate::valuation::valuation_model::{PropertyType, ValuationInput, ValuationResult};
use crate::valuation::valuation_traits::ValuationServiceTrait;

/// Stateless valuation engine. One instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }
}

impl ValuationServiceTrait for ValuationService {
    fn valuate(&self, input: &ValuationInput) -> Result<ValuationResult> {
        let result = calculate_input(input).inspect_err(|e| {
            warn!("Valuation failed for {:?}: {}", input, e);
        })?;
        info!(
            "Valuation calculated: {}",
            format_currency(result.estimated_value)
        );
        Ok(result)
    }

    fn base_rate(&self, property_type: PropertyType) -> Decimal {
        base_rate_for(property_type)
    }

    fn depreciation(&self, age_years: i64) -> Result<Decimal> {
        depreciation_for(age_years)
    }
}
