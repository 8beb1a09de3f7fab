//! Common implementations and shared functionality for the jcurve library
//!
//! This crate provides utilities used across multiple jcurve components:
//! big-integer modular arithmetic and the byte framing used to exchange
//! keys and signatures with a transport layer.

pub mod math_common;
pub mod wire;

pub use math_common::{gcd, mod_exp, mod_inverse, mod_inverse_prime, to_fixed_be};
pub use wire::{ByteVector, WireFormat};
