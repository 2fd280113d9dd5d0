//! Error types for the Show Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving calculations.
//!
//! The compensation calculator itself is total: every input field has a
//! defined default, so the pure calculation functions never return errors.
//! Errors arise only from the configuration layer (missing or malformed
//! mileage rate files, or no rate on file for a show date).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Show Compensation Engine.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// No standard mileage rate was on file for the given date.
    #[error("No standard mileage rate on file for date {date}")]
    RateNotFound {
        /// The date for which a rate was requested.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
