//! Error types for the payroll engine.
//!
//! The calculation functions are total over their numeric inputs and never
//! fail. Errors only arise at the edges: loading a rate table and reading a
//! stored settings record.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use domestic_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// A rate table parsed correctly but holds an unusable figure.
    #[error("Invalid rate table field '{field}': {message}")]
    InvalidRateTable {
        /// The offending field, dotted for nested values.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A minimum-salary override lies outside the range the engine accepts.
    #[error("Minimum salary {salary} is outside the accepted range 0 to {ceiling}")]
    SalaryOutOfRange {
        /// The rejected override.
        salary: Decimal,
        /// The largest override accepted for the active rate table.
        ceiling: Decimal,
    },

    /// A stored settings record could not be read.
    #[error("Failed to parse stored settings: {message}")]
    SettingsParseError {
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
