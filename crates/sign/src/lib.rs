//! Digital Signature Schemes
//!
//! This crate implements ECDSA over any curve from `jcurve-algorithms`,
//! generic over the message digest.

pub mod ecdsa;

// Re-exports
pub use ecdsa::{Ecdsa, EcdsaSignature};
