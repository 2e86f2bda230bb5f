use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    ANNUAL_DEPRECIATION, CURRENCY_DECIMAL_PRECISION, INDUSTRIAL_RATE, MAX_AGE_YEARS,
    MAX_DEPRECIATION, MAX_SIZE_SQFT, MULTIFAMILY_RATE, OFFICE_RATE, PERCENT_DISPLAY_PRECISION,
    RETAIL_RATE,
};
use crate::errors::{CalculatorError, Result, ValidationError};
use crate::valuation::valuation_model::{
    PropertyType, ValuationBreakdown, ValuationInput, ValuationResult, AGE_NEGATIVE,
    SIZE_NOT_POSITIVE,
};

/// Rate per square foot for a property type.
pub fn base_rate_for(property_type: PropertyType) -> Decimal {
    match property_type {
        PropertyType::Multifamily => MULTIFAMILY_RATE,
        PropertyType::Retail => RETAIL_RATE,
        PropertyType::Office => OFFICE_RATE,
        PropertyType::Industrial => INDUSTRIAL_RATE,
    }
}

/// Linear depreciation of one percent per year, capped at forty percent.
///
/// The result is an exact multiple of 0.01 and is never rounded.
pub fn depreciation_for(age_years: i64) -> Result<Decimal> {
    if age_years < 0 {
        return Err(ValidationError::InvalidInput(AGE_NEGATIVE.to_string()).into());
    }
    let linear = Decimal::from(age_years)
        .checked_mul(ANNUAL_DEPRECIATION)
        .ok_or(CalculatorError::Overflow("depreciation factor"))?;
    Ok(linear.min(MAX_DEPRECIATION))
}

/// True when raw inputs lie past the limits [`ValuationInput`] accepts.
pub fn exceeds_input_limits(size_sqft: i64, age_years: i64) -> bool {
    size_sqft > MAX_SIZE_SQFT || age_years > MAX_AGE_YEARS
}

/// Values a property as of now.
///
/// Only the lower bounds are rejected here; inputs past the upper bounds
/// of [`ValuationInput`] are valued with a warning. Arithmetic is checked,
/// so an unbounded size fails with [`CalculatorError::Overflow`] instead
/// of wrapping.
pub fn calculate(
    property_type: PropertyType,
    size_sqft: i64,
    age_years: i64,
) -> Result<ValuationResult> {
    calculate_as_of(property_type, size_sqft, age_years, Utc::now())
}

/// Values a property, stamping the result with `valuation_timestamp`.
pub fn calculate_as_of(
    property_type: PropertyType,
    size_sqft: i64,
    age_years: i64,
    valuation_timestamp: DateTime<Utc>,
) -> Result<ValuationResult> {
    if size_sqft <= 0 {
        return Err(ValidationError::InvalidInput(SIZE_NOT_POSITIVE.to_string()).into());
    }
    if age_years < 0 {
        return Err(ValidationError::InvalidInput(AGE_NEGATIVE.to_string()).into());
    }
    if exceeds_input_limits(size_sqft, age_years) {
        warn!(
            "Valuing {} {}sqft {}yrs outside the accepted input range (size <= {}, age <= {})",
            property_type, size_sqft, age_years, MAX_SIZE_SQFT, MAX_AGE_YEARS
        );
    }

    let base_rate = base_rate_for(property_type);
    let base_value = Decimal::from(size_sqft)
        .checked_mul(base_rate)
        .ok_or(CalculatorError::Overflow("base value"))?;

    let depreciation_factor = depreciation_for(age_years)?;

    // Final value is derived from the unrounded base value.
    let final_value = base_value
        .checked_mul(Decimal::ONE - depreciation_factor)
        .ok_or(CalculatorError::Overflow("final value"))?;

    let breakdown = ValuationBreakdown {
        base_value: round_currency(base_value),
        depreciation_factor,
        final_value: round_currency(final_value),
    };

    debug!(
        "Valued {} {}sqft {}yrs: base {} depreciation {} final {}",
        property_type,
        size_sqft,
        age_years,
        breakdown.base_value,
        breakdown.depreciation_factor,
        breakdown.final_value
    );

    Ok(ValuationResult {
        estimated_value: breakdown.final_value,
        valuation_timestamp,
        methodology: methodology(base_rate, depreciation_factor),
        breakdown,
    })
}

/// Values an input that already passed contract validation.
pub fn calculate_input(input: &ValuationInput) -> Result<ValuationResult> {
    calculate(input.property_type(), input.size_sqft(), input.age_years())
}

/// Rounds a currency amount to cents, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PRECISION);
    rounded
}

/// Dollar amount rounded to cents with thousands separators: `$8,500,000.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// `Base rate ($200/sqft) with 15.0% age depreciation`
pub fn methodology(base_rate: Decimal, depreciation_factor: Decimal) -> String {
    let mut percent = (depreciation_factor * Decimal::ONE_HUNDRED).round_dp_with_strategy(
        PERCENT_DISPLAY_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    percent.rescale(PERCENT_DISPLAY_PRECISION);
    format!(
        "Base rate (${}/sqft) with {}% age depreciation",
        base_rate.normalize(),
        percent
    )
}
