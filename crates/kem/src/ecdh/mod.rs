//! Elliptic Curve Diffie-Hellman key agreement
//!
//! Each party generates a secret scalar d and publishes Q = d·G. Given the
//! peer's Q', both sides compute d·Q' and keep its affine x-coordinate.
//!
//! # Security Note
//!
//! The shared secret is the raw x-coordinate, not the output of a key
//! derivation function. Callers that need uniformly random key material
//! must run it through a KDF themselves.
//!
//! Peer keys are checked to be finite points on the agreed curve before
//! use. The NIST curves have cofactor 1, so that is also a full subgroup
//! check for them. Custom curves with a cofactor are not checked further.

use std::fmt;

use jcurve_algorithms::ec::{registry, Curve, CurveId, KeyPair, PublicKey, SecretScalar};
use jcurve_api::error::validate;
use jcurve_api::{Error as ApiError, KeyAgreement, Result as ApiResult};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};


/// ECDH bound to one curve
#[derive(Debug, Clone)]
pub struct Ecdh {
    curve: Curve,
}

/// Shared secret from ECDH: the fixed-width affine x-coordinate of d·Q'
#[derive(Clone)]
pub struct EcdhSharedSecret(Zeroizing<Vec<u8>>);

impl Ecdh {
    /// ECDH over `curve`
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// ECDH over a registered curve
    pub fn for_curve(id: CurveId) -> Self {
        Self::new(registry::curve(id))
    }

    /// The agreed curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generate a key pair with d drawn uniformly from [1, n-1]
    pub fn generate_keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        Ok(KeyPair::generate(&self.curve, rng)?)
    }

    /// Derive the shared secret from our secret and the peer's public key
    ///
    /// Fails with `InvalidPoint` when the peer key is not a finite point on
    /// the curve, and with `InvalidKey` when the secret lies outside
    /// [1, n-1] for this curve.
    pub fn shared_secret(
        &self,
        secret: &SecretScalar,
        peer: &PublicKey,
    ) -> ApiResult<EcdhSharedSecret> {
        let d = secret.to_uint();
        validate::key(
            !d.is_zero() && &d < self.curve.n(),
            "ECDH secret",
            &format!("scalar is outside [1, n-1] for {}", self.curve.name()),
        )?;

        let peer_point = peer.to_point(&self.curve).map_err(|e| {
            log::debug!("rejecting ECDH peer key on {}: {}", self.curve.name(), e);
            ApiError::from(e)
        })?;

        let shared = peer_point.mul(&d).to_affine()?;
        Ok(EcdhSharedSecret(Zeroizing::new(shared.x_bytes())))
    }

    /// Derive the shared secret from the peer's raw big-endian coordinates
    pub fn shared_secret_from_bytes(
        &self,
        secret: &SecretScalar,
        peer_x: &[u8],
        peer_y: &[u8],
    ) -> ApiResult<EcdhSharedSecret> {
        let peer = PublicKey::from_coordinates(peer_x, peer_y)?;
        self.shared_secret(secret, &peer)
    }
}

impl KeyAgreement for Ecdh {
    type PublicKey = PublicKey;
    type SecretKey = SecretScalar;
    type SharedSecret = EcdhSharedSecret;
    type KeyPair = KeyPair;

    fn name(&self) -> String {
        format!("ECDH-{}", self.curve.name())
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        self.generate_keypair(rng)
    }

    fn agree(&self, secret_key: &SecretScalar, peer_public_key: &PublicKey) -> ApiResult<EcdhSharedSecret> {
        self.shared_secret(secret_key, peer_public_key)
    }
}

impl EcdhSharedSecret {
    /// The secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes, equal to the curve's coordinate width
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty, which never happens for a derived secret
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Export the secret in a buffer that is wiped on drop
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.clone()
    }
}

impl AsRef<[u8]> for EcdhSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Zeroize for EcdhSharedSecret {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl PartialEq for EcdhSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for EcdhSharedSecret {}

impl fmt::Debug for EcdhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhSharedSecret([REDACTED; {}])", self.0.len())
    }
}
