//! Error types for the array and axis operators.
//!
//! The numeric kernels in [`math`](crate::math) never fail: they report domain
//! and range problems through NaN and infinities like IEEE-754 arithmetic. Only
//! the operators that take whole arrays or plotting ranges validate their input
//! and return these errors.

use std::fmt;

/// Errors returned by jbm operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JbmError {
    /// Input validation error, such as slices of different lengths.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
    /// A range or count outside the domain of the operation.
    DomainError {
        /// Name of the rejected argument.
        argument: &'static str,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for JbmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JbmError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            JbmError::DomainError { argument, message } => {
                write!(f, "Domain error for `{}`: {}", argument, message)
            }
        }
    }
}

impl std::error::Error for JbmError {}

/// Result type alias for jbm operations.
pub type Result<T> = std::result::Result<T, JbmError>;

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> JbmError {
    JbmError::ValidationError {
        message: message.into(),
    }
}

/// Creates a domain error for `argument`.
pub fn domain_error(argument: &'static str, message: impl Into<String>) -> JbmError {
    JbmError::DomainError {
        argument,
        message: message.into(),
    }
}
