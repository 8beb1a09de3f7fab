//! Elliptic Curve Primitives
//!
//! Short-Weierstrass curves `y² = x³ + ax + b` over a prime field, with
//! points kept in Jacobian projective coordinates (X:Y:Z) where x = X/Z²
//! and y = Y/Z³. Curves are runtime values, so one implementation serves
//! every parameter set, from toy curves in tests to NIST P-521.
//!
//! # Security Note
//!
//! Scalar multiplication is a variable-time double-and-add and the field
//! arithmetic is variable-time big-integer arithmetic. Both leak the scalar
//! through timing.

mod curve;
mod keys;
mod point;
pub mod registry;


pub use curve::{Curve, CurveParams};
pub use keys::{random_scalar, KeyPair, PublicKey, SecretScalar};
pub use point::{AffinePoint, Point};
pub use registry::CurveId;
