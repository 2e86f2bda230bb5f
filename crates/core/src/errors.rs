//! Core error types for the valuation service.
//!
//! Errors fall into two tiers: validation failures caused by the caller's
//! input, and everything else. The HTTP layer only needs [`Error::is_validation`]
//! to decide which tier it is looking at.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Valuation calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

impl Error {
    /// Returns true when the error was caused by caller input and can be
    /// reported back verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Errors raised while turning raw input into a valuation input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),
}

/// Errors that occur inside the valuation arithmetic.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}
