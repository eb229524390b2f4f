//! Error types for the employment credit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate schedules or
//! computing a credit.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::HeadcountField;

/// The main error type for the employment credit engine.
///
/// The calculation core returns [`EngineError::Validation`] and
/// [`EngineError::CalculationError`]; the remaining variants come from
/// configuration loading and the API layer.
///
/// # Example
///
/// ```
/// use employment_credit::error::EngineError;
/// use employment_credit::models::HeadcountField;
///
/// let error = EngineError::Validation {
///     field: HeadcountField::PriorRegular,
///     value: -1,
/// };
/// assert_eq!(
///     error.to_string(),
///     "prior-year regular workers cannot be negative (got -1)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A headcount input was negative.
    #[error("{field} cannot be negative (got {value})")]
    Validation {
        /// The offending input.
        field: HeadcountField,
        /// The rejected value.
        value: i64,
    },

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

    /// No rate schedule is in force on the requested date.
    #[error("No rate schedule in effect on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
