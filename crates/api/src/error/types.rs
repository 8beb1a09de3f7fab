//! Error type definitions for elliptic curve operations

use thiserror::Error;

/// Primary error type for elliptic curve operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("Invalid parameter: {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Coordinates that do not satisfy the curve equation, or the point at
    /// infinity where a finite point is required
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Modular inverse of a non-unit was requested
    #[error("No modular inverse exists in {context}")]
    NoInverse { context: &'static str },

    /// Operands belong to different fields or curves
    #[error("Type mismatch in {context}: {message}")]
    TypeMismatch {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for elliptic curve operations
pub type Result<T> = core::result::Result<T, Error>;
