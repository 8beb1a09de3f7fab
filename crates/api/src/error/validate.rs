//! Validation utilities for public API inputs

use super::types::{Error, Result};

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Validate a key condition
pub fn key(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_checks() {
        assert!(parameter(true, "p", "unused").is_ok());
        match parameter(false, "p", "modulus too small") {
            Err(Error::InvalidParameter { context, message }) => {
                assert_eq!(context, "p");
                assert_eq!(message, "modulus too small");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            key(false, "secret", "zero"),
            Err(Error::InvalidKey { .. })
        ));
    }
}
