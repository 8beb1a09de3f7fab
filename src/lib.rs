//! # jcurve
//!
//! Prime-field elliptic curve cryptography built from first principles:
//! modular arithmetic, a Jacobian-coordinate point group, the NIST P-192,
//! P-224, P-256, P-384 and P-521 curves, ECDH key agreement and ECDSA
//! signatures.
//!
//! ## Usage
//!
//! ```rust
//! use jcurve::prelude::*;
//! use rand_chacha::ChaCha20Rng;
//! use rand::SeedableRng;
//!
//! fn keys_for<R: CryptoRng + RngCore>(ecdh: &Ecdh, rng: &mut R) -> Result<KeyPair> {
//!     ecdh.generate_keypair(rng)
//! }
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//!
//! // Key agreement
//! let ecdh = Ecdh::for_curve(CurveId::P256);
//! let alice = keys_for(&ecdh, &mut rng)?;
//! let bob = keys_for(&ecdh, &mut rng)?;
//! assert_eq!(
//!     ecdh.shared_secret(alice.secret(), bob.public())?,
//!     ecdh.shared_secret(bob.secret(), alice.public())?,
//! );
//!
//! // Signatures
//! let ecdsa: Ecdsa = Ecdsa::for_curve(CurveId::P256);
//! let signature = ecdsa.sign(alice.secret(), b"hello", &mut rng)?;
//! assert!(ecdsa.verify(alice.public(), &signature, b"hello")?);
//! # Ok::<(), jcurve::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kem` (default): ECDH through `jcurve-kem`
//! - `sign` (default): ECDSA through `jcurve-sign`
//! - `serde`: `Serialize`/`Deserialize` for curve ids, public keys and signatures
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! - [`jcurve-api`]: error type and the `Signature`, `KeyAgreement`,
//!   `HashFunction` and `Serialize` traits
//! - [`jcurve-common`]: modular arithmetic helpers and the wire codec
//! - [`jcurve-params`]: published curve constants
//! - [`jcurve-algorithms`]: fields, points, curves, keys and digests
//! - [`jcurve-kem`]: ECDH
//! - [`jcurve-sign`]: ECDSA

// Core re-exports (always available)
pub use jcurve_algorithms as algorithms;
pub use jcurve_api as api;
pub use jcurve_common as common;
pub use jcurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use jcurve_kem as kem;

#[cfg(feature = "sign")]
pub use jcurve_sign as sign;

/// Common imports for jcurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{HashFunction, KeyAgreement, Serialize, Signature};

    // Curves, points and key material
    pub use crate::algorithms::ec::{
        registry, AffinePoint, Curve, CurveId, KeyPair, Point, PublicKey, SecretScalar,
    };
    pub use crate::algorithms::field::{FieldElement, PrimeField};
    pub use crate::algorithms::hash::{Sha224, Sha256, Sha384, Sha512};

    // Wire framing
    pub use crate::common::wire::{DigitallySigned, SignatureAndHashAlgorithm, WireFormat};

    pub use num_bigint::BigUint;
    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::Zeroize;

    #[cfg(feature = "kem")]
    pub use crate::kem::{Ecdh, EcdhSharedSecret};

    #[cfg(feature = "sign")]
    pub use crate::sign::{Ecdsa, EcdsaSignature};
}
