use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use super::curve::Curve;
use super::point::Point;
use crate::error::{validate, Error, Result};
use jcurve_api::{Result as ApiResult, Serialize};
use jcurve_common::math_common::to_fixed_be;
use jcurve_common::wire::{PublicKeyMessage, WireFormat, COMPONENT_CEILING};

/// Draw a scalar uniformly from [1, n-1]
///
/// Candidates are `n.bits()`-bit strings from `rng`; anything outside the
/// range is discarded and redrawn. A failing generator is an error, never
/// a reason to fall back.
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, n: &BigUint) -> Result<BigUint> {
    validate::parameter(n > &BigUint::from(1u32), "n", "range [1, n-1] is empty")?;

    let bits = n.bits();
    let len = ((bits + 7) / 8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut buf = Zeroizing::new(vec![0u8; len]);

    loop {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < n {
            return Ok(candidate);
        }
    }
}

/// A secret scalar d ∈ [1, n-1], stored as fixed-width big-endian bytes
///
/// The bytes are wiped on drop. `Debug` never prints them.
#[derive(Clone)]
pub struct SecretScalar(Zeroizing<Vec<u8>>);

impl SecretScalar {
    /// Wrap an integer already known to lie in [1, n-1] of `curve`
    pub fn from_uint(curve: &Curve, d: &BigUint) -> Result<Self> {
        validate::parameter(!d.is_zero() && d < curve.n(), "secret scalar", "must lie in [1, n-1]")?;
        Ok(Self(Zeroizing::new(to_fixed_be(d, curve.scalar_len()))))
    }

    /// Parse big-endian bytes, enforcing the [1, n-1] range
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        validate::max_length("secret scalar", bytes.len(), curve.scalar_len())?;
        Self::from_uint(curve, &BigUint::from_bytes_be(bytes))
    }

    /// Generate a fresh random scalar for `curve`
    pub fn random<R: CryptoRng + RngCore>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let d = random_scalar(rng, curve.n())?;
        Self::from_uint(curve, &d)
    }

    /// The big-endian bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The scalar as an integer
    pub fn to_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl Zeroize for SecretScalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SecretScalar {}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar([REDACTED])")
    }
}

/// A public point as its two big-endian affine coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PublicKey {
    coords: PublicKeyMessage,
}

impl PublicKey {
    /// Wrap raw coordinate bytes without validating them
    ///
    /// Validation happens in [`PublicKey::to_point`], against the curve the
    /// key is used with.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        validate::max_length("public key x", x.len(), COMPONENT_CEILING)?;
        validate::max_length("public key y", y.len(), COMPONENT_CEILING)?;
        let coords = PublicKeyMessage::new(x, y).map_err(|_| Error::Length {
            context: "public key",
            expected: COMPONENT_CEILING,
            actual: x.len().max(y.len()),
        })?;
        Ok(Self { coords })
    }

    /// Encode a finite point at the curve's coordinate width
    pub fn from_point(point: &Point) -> Result<Self> {
        let affine = point.to_affine()?;
        Self::from_coordinates(&affine.x_bytes(), &affine.y_bytes())
    }

    /// x-coordinate bytes
    pub fn x(&self) -> &[u8] {
        self.coords.x.as_bytes()
    }

    /// y-coordinate bytes
    pub fn y(&self) -> &[u8] {
        self.coords.y.as_bytes()
    }

    /// Reconstruct the point on `curve`
    ///
    /// Fails with `InvalidPoint` unless the coordinates are canonical and
    /// satisfy the curve equation. The identity has no affine encoding, so
    /// it can never be produced here.
    pub fn to_point(&self, curve: &Curve) -> Result<Point> {
        let x = BigUint::from_bytes_be(self.x());
        let y = BigUint::from_bytes_be(self.y());
        Point::from_affine(curve, &x, &y)
            .map_err(|_| Error::point("public key", "coordinates are not a point on the curve"))
    }

    /// The wire message for this key
    pub fn to_message(&self) -> &PublicKeyMessage {
        &self.coords
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let coords = PublicKeyMessage::from_wire(bytes)?;
        Ok(Self { coords })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.coords.to_wire()
    }
}

impl From<PublicKeyMessage> for PublicKey {
    fn from(coords: PublicKeyMessage) -> Self {
        Self { coords }
    }
}

/// A secret scalar d with its public point Q = d·G
#[derive(Clone)]
pub struct KeyPair {
    curve: Curve,
    secret: SecretScalar,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a key pair on `curve` from a secure random source
    pub fn generate<R: CryptoRng + RngCore>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let secret = SecretScalar::random(curve, rng)?;
        Self::from_secret(curve, secret)
    }

    /// Derive the public point for an externally supplied secret
    pub fn from_secret(curve: &Curve, secret: SecretScalar) -> Result<Self> {
        let d = secret.to_uint();
        validate::parameter(!d.is_zero() && &d < curve.n(), "secret scalar", "must lie in [1, n-1]")?;
        let q = curve.generator().mul(&d);
        let public = PublicKey::from_point(&q)?;
        Ok(Self {
            curve: curve.clone(),
            secret,
            public,
        })
    }

    /// The curve the pair lives on
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The secret scalar
    pub fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    /// The public key
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Split into its parts
    pub fn into_parts(self) -> (SecretScalar, PublicKey) {
        (self.secret, self.public)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve.name())
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
