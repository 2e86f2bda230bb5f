//! Valuation module - domain models, calculator, and service.

pub mod valuation_calculator;
pub mod valuation_model;
mod valuation_service;
mod valuation_traits;

mod valuation_model_tests;

pub use valuation_calculator::{
    base_rate_for, calculate, calculate_as_of, calculate_input, depreciation_for,
    exceeds_input_limits, format_currency, methodology, round_currency,
};
pub use valuation_model::{
    PropertyType, ValuationBreakdown, ValuationInput, ValuationResult, AGE_NEGATIVE, AGE_TOO_OLD,
    SIZE_NOT_POSITIVE, SIZE_TOO_LARGE,
};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;
