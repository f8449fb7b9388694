//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation engine itself is total over its input domain (malformed
//! inputs are clamped, never rejected), so errors only arise from
//! configuration loading and validation, from asking for a rate table no
//! configuration covers, and from the inverse solver failing to converge.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use zarada_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table violated a statutory invariant.
    #[error("Invalid rate table field '{field}': {message}")]
    InvalidRateTable {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No rate table is effective on the given date.
    #[error("No rate table effective on date {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// The net-to-gross bisection exhausted its iteration budget without
    /// bringing the computed net within tolerance of the target.
    #[error("Net-to-gross solver did not converge for target net {target_net} after {iterations} iterations")]
    SolverDidNotConverge {
        /// The target net amount that was being solved for.
        target_net: Decimal,
        /// The number of iterations performed.
        iterations: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
