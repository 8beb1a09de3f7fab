//! Error handling for arithmetic primitives

use std::borrow::Cow;

use jcurve_api::Error as CoreError;
use thiserror::Error;

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Inversion of an element that is not a unit
    #[error("No modular inverse in {context}")]
    NoInverse {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// The point is infinity, or its coordinates are off the curve
    #[error("Invalid point in {context}: {reason}")]
    InvalidPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// Operands belong to different fields or curves
    #[error("Type mismatch in {context}: expected {expected}")]
    TypeMismatch {
        context: &'static str,
        expected: Cow<'static, str>,
    },

    /// No curve registered under the requested name
    #[error("Unknown curve '{name}'")]
    UnknownCurve { name: String },

    /// The random source failed
    #[error("Random generation failed: {details}")]
    RandomGeneration { details: String },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn point(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidPoint { context, reason }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomGeneration {
            details: err.to_string(),
        }
    }
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NoInverse { context } => CoreError::NoInverse { context },
            Error::InvalidPoint { context, reason } => CoreError::InvalidPoint {
                context,
                message: reason.to_string(),
            },
            Error::TypeMismatch { context, expected } => CoreError::TypeMismatch {
                context,
                message: format!("expected {}", expected),
            },
            Error::UnknownCurve { name } => CoreError::InvalidParameter {
                context: "curve name",
                message: format!("unknown curve '{}'", name),
            },
            Error::RandomGeneration { details } => CoreError::RandomGenerationError {
                context: "random scalar",
                message: details,
            },
        }
    }
}

pub mod validate;
