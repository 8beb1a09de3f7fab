//! Public API traits and types for the jcurve library
//!
//! This crate provides the public API surface for the jcurve ecosystem: the
//! error type every fallible operation returns, input validation helpers, and
//! the traits that algorithm crates implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{HashFunction, KeyAgreement, Serialize, Signature};

// Re-export trait modules for direct access
pub use traits::{hash, key_agreement, serialize, signature};
