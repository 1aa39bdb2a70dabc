//! # Error Types
//!
//! Structured error types for inch_core. Every failure the engine can produce
//! is a tagged variant the caller can match on and turn into a user-facing
//! message; nothing in the engine aborts the process.
//!
//! ## Example
//!
//! ```rust
//! use inch_core::errors::{MeasureError, MeasureResult};
//!
//! fn require_nonzero(denominator: i64) -> MeasureResult<()> {
//!     if denominator == 0 {
//!         return Err(MeasureError::invalid_fraction(
//!             "1/0",
//!             "denominator cannot be zero",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for inch_core operations
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Structured error type for measurement operations.
///
/// Each variant carries enough context for the caller to display a precise
/// message without re-parsing the input. All variants are recoverable: the
/// engine is stateless, so no error poisons later calls.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum MeasureError {
    /// Feet or inches text did not parse as a whole number
    #[error("Invalid {field} value '{value}': expected a whole number")]
    InvalidInteger { field: String, value: String },

    /// Fraction text was malformed or had a zero denominator
    #[error("Invalid fraction '{value}': {reason}")]
    InvalidFraction { value: String, reason: String },

    /// The divisor measurement was exactly zero
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Operation selector was not one of add/subtract/multiply/divide
    #[error("Invalid operation: '{op}'")]
    InvalidOperation { op: String },

    /// A custom denominator set was empty, unsorted, or contained zero
    #[error("Invalid fraction set: {reason}")]
    InvalidFractionSet { reason: String },
}

impl MeasureError {
    /// Create an InvalidInteger error
    pub fn invalid_integer(field: impl Into<String>, value: impl Into<String>) -> Self {
        MeasureError::InvalidInteger {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidFraction error
    pub fn invalid_fraction(value: impl Into<String>, reason: impl Into<String>) -> Self {
        MeasureError::InvalidFraction {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(op: impl Into<String>) -> Self {
        MeasureError::InvalidOperation { op: op.into() }
    }

    /// Create an InvalidFractionSet error
    pub fn invalid_fraction_set(reason: impl Into<String>) -> Self {
        MeasureError::InvalidFractionSet {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MeasureError::InvalidInteger { .. } => "INVALID_INTEGER",
            MeasureError::InvalidFraction { .. } => "INVALID_FRACTION",
            MeasureError::DivideByZero => "DIVIDE_BY_ZERO",
            MeasureError::InvalidOperation { .. } => "INVALID_OPERATION",
            MeasureError::InvalidFractionSet { .. } => "INVALID_FRACTION_SET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MeasureError::invalid_integer("feet", "abc");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: MeasureError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);

        let error = MeasureError::DivideByZero;
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: MeasureError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MeasureError::invalid_fraction("1/0", "zero denominator").error_code(),
            "INVALID_FRACTION"
        );
        assert_eq!(MeasureError::DivideByZero.error_code(), "DIVIDE_BY_ZERO");
        assert_eq!(
            MeasureError::invalid_operation("modulo").error_code(),
            "INVALID_OPERATION"
        );
    }

    #[test]
    fn test_error_messages() {
        let error = MeasureError::invalid_integer("inches", "7.5");
        assert_eq!(
            error.to_string(),
            "Invalid inches value '7.5': expected a whole number"
        );
    }
}
