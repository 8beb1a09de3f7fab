//! Error handling for the jcurve ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "random number generator",
            message: e.to_string(),
        }
    }
}

