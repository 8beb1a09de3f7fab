//! Arithmetic core of the jcurve library
//!
//! Layers, leaves first:
//! - [`field`]: elements of a prime field with reduced representatives
//! - [`ec`]: short-Weierstrass curves, the Jacobian point group, the NIST
//!   curve registry and key material
//! - [`hash`]: digest adapters used by signature schemes
//!
//! Nothing here runs in constant time. Scalar multiplication branches on
//! scalar bits and the big-integer backend is variable-time.

pub mod ec;
pub mod error;
pub mod field;
pub mod hash;

pub use error::{Error, Result};

pub use ec::{
    AffinePoint, Curve, CurveId, CurveParams, KeyPair, Point, PublicKey, SecretScalar,
};
pub use field::{FieldElement, PrimeField};
pub use hash::{Sha224, Sha256, Sha384, Sha512};
