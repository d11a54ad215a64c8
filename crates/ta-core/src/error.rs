//! Error types for indicator dispatch and input validation.
//!
//! Indicator functions themselves never fail: insufficient data and invalid
//! parameters both produce NaN-filled output. The errors here cover what sits
//! around them: validating caller-supplied price data, resolving indicator and
//! parameter names, and assembling multi-line results.

use thiserror::Error;

/// Result type alias for fallible engine operations.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur around indicator computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    /// No indicator is registered under the requested name.
    #[error("Unknown indicator: '{0}'")]
    UnknownIndicator(String),

    /// A parameter name is not accepted by the indicator.
    #[error("Unknown parameter '{name}' for indicator {indicator}")]
    UnknownParameter {
        /// Indicator the parameter was supplied for.
        indicator: String,
        /// The unrecognised parameter name.
        name: String,
    },

    /// A price field is NaN or infinite.
    #[error("Non-finite {field} at index {index}")]
    NonFiniteInput {
        /// Position of the offending price point.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },

    /// A timestamp is not strictly greater than its predecessor.
    #[error("Timestamp at index {index} is not strictly increasing")]
    NonIncreasingTimestamp {
        /// Position of the offending price point.
        index: usize,
    },

    /// Series length mismatch when combining aligned series.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A named output line was added twice.
    #[error("Duplicate output line: '{0}'")]
    DuplicateLine(String),
}
