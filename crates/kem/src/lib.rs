//! Key agreement
//!
//! This crate implements Elliptic Curve Diffie-Hellman over any curve from
//! `jcurve-algorithms`, including every curve in the NIST registry.

pub mod ecdh;

// Re-exports
pub use ecdh::{Ecdh, EcdhSharedSecret};
