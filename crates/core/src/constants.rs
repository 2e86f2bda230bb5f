use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places kept on currency amounts
pub const CURRENCY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places shown for the depreciation percentage in the methodology text
pub const PERCENT_DISPLAY_PRECISION: u32 = 1;

/// Largest accepted property size, in square feet
pub const MAX_SIZE_SQFT: i64 = 10_000_000;

/// Oldest accepted property age, in years
pub const MAX_AGE_YEARS: i64 = 200;

/// Depreciation applied per year of age
pub const ANNUAL_DEPRECIATION: Decimal = dec!(0.01);

/// Depreciation never exceeds this fraction of the base value
pub const MAX_DEPRECIATION: Decimal = dec!(0.40);

/// Rate per square foot for multifamily properties
pub const MULTIFAMILY_RATE: Decimal = dec!(200);

/// Rate per square foot for retail properties
pub const RETAIL_RATE: Decimal = dec!(150);

/// Rate per square foot for office properties
pub const OFFICE_RATE: Decimal = dec!(180);

/// Rate per square foot for industrial properties
pub const INDUSTRIAL_RATE: Decimal = dec!(100);
