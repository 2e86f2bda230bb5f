//! Valuation Core - formula-based commercial property valuation.
//!
//! This crate holds the valuation formula and the input contract that
//! guards it. It has no I/O and no shared state; the HTTP server lives in
//! `valuation-server`.

pub mod constants;
pub mod errors;
pub mod valuation;

pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
