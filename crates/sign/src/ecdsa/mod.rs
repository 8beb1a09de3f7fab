//! Elliptic Curve Digital Signature Algorithm
//!
//! Signing draws a fresh nonce k from [1, n-1] for every attempt and
//! computes R = k·G, r = R.x mod n and s = (z + r·d) / k mod n, where z is
//! the leftmost `n.bits()` bits of the message digest. An attempt that
//! yields r = 0 or s = 0 is discarded together with its nonce and a new one
//! is drawn. There is no retry cap; for real curves a retry is practically
//! never needed.
//!
//! Verification recomputes R' = (z/s)·G + (r/s)·Q and accepts iff R' is
//! finite and R'.x mod n = r. Signatures that are well-formed but wrong,
//! including those with r or s outside [1, n-1], verify as `false`.

use std::marker::PhantomData;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use jcurve_algorithms::ec::{random_scalar, registry, Curve, CurveId, KeyPair, PublicKey, SecretScalar};
use jcurve_algorithms::hash::Sha256;
use jcurve_api::error::validate;
use jcurve_api::{Error as ApiError, HashFunction, Result as ApiResult, Signature};
use jcurve_common::wire::{
    DigitallySigned, HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm,
};

mod signature;

pub use signature::EcdsaSignature;


/// ECDSA over one curve with digest `H`
#[derive(Debug, Clone)]
pub struct Ecdsa<H: HashFunction = Sha256> {
    curve: Curve,
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Ecdsa<H> {
    /// ECDSA over `curve`
    pub fn new(curve: Curve) -> Self {
        Self {
            curve,
            _hash: PhantomData,
        }
    }

    /// ECDSA over a registered curve
    pub fn for_curve(id: CurveId) -> Self {
        Self::new(registry::curve(id))
    }

    /// The signing curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generate a signing key pair
    pub fn generate_keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        Ok(KeyPair::generate(&self.curve, rng)?)
    }

    /// Hash `message` and keep the leftmost `n.bits()` bits of the digest
    ///
    /// The result is not reduced mod n.
    pub fn digest_to_scalar(&self, message: &[u8]) -> BigUint {
        let digest = H::digest(message);
        let z = BigUint::from_bytes_be(&digest);
        let digest_bits = digest.len() as u64 * 8;
        let order_bits = self.curve.order_bits();
        if digest_bits > order_bits {
            z >> (digest_bits - order_bits)
        } else {
            z
        }
    }

    /// Sign `message`, drawing nonces from `rng` until an attempt succeeds
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        secret: &SecretScalar,
        message: &[u8],
        rng: &mut R,
    ) -> ApiResult<EcdsaSignature> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let k = random_scalar(rng, self.curve.n())?;
            if let Some(signature) = self.sign_with_nonce(secret, message, &k)? {
                return Ok(signature);
            }
            log::trace!(
                "ECDSA nonce rejected on {} (attempt {})",
                self.curve.name(),
                attempts
            );
        }
    }

    /// One signing attempt with the caller's nonce `k`
    ///
    /// Returns `Ok(None)` when r = 0 or s = 0. The nonce must never be
    /// reused for a different message under the same secret.
    pub fn sign_with_nonce(
        &self,
        secret: &SecretScalar,
        message: &[u8],
        k: &BigUint,
    ) -> ApiResult<Option<EcdsaSignature>> {
        let n = self.curve.n();
        let d = secret.to_uint();
        validate::key(
            !d.is_zero() && &d < n,
            "ECDSA secret",
            &format!("scalar is outside [1, n-1] for {}", self.curve.name()),
        )?;
        validate::parameter(!k.is_zero() && k < n, "ECDSA nonce", "nonce must lie in [1, n-1]")?;

        let scalars = self.curve.scalar_field();
        let big_r = self.curve.generator().mul(k).to_affine()?;
        let r = scalars.element(big_r.x().value().clone());
        if r.is_zero() {
            return Ok(None);
        }

        let z = scalars.element(self.digest_to_scalar(message));
        let s = z
            .add(&r.mul(&scalars.element(d)))
            .div(&scalars.element(k.clone()))?;
        if s.is_zero() {
            return Ok(None);
        }

        EcdsaSignature::from_scalars(&self.curve, r.value(), s.value()).map(Some)
    }

    /// Verify `signature` over `message` against `public`
    ///
    /// Errors only when the public key is not a finite point on the curve.
    pub fn verify(
        &self,
        public: &PublicKey,
        signature: &EcdsaSignature,
        message: &[u8],
    ) -> ApiResult<bool> {
        let q = public.to_point(&self.curve)?;
        let n = self.curve.n();

        let r = signature.r_uint();
        let s = signature.s_uint();
        if r.is_zero() || &r >= n || s.is_zero() || &s >= n {
            log::debug!("ECDSA signature component out of range on {}", self.curve.name());
            return Ok(false);
        }

        let scalars = self.curve.scalar_field();
        let w = scalars.element(s).invert()?;
        let u1 = scalars.element(self.digest_to_scalar(message)).mul(&w);
        let u2 = scalars.element(r.clone()).mul(&w);

        let candidate = self.curve.generator().mul(u1.value()).add(&q.mul(u2.value()));
        if candidate.is_infinity() {
            log::debug!("ECDSA verification reached the identity on {}", self.curve.name());
            return Ok(false);
        }

        let x = candidate.to_affine()?.x().value() % n;
        Ok(x == r)
    }

    /// The wire algorithm pair for ECDSA with `H`
    pub fn algorithm() -> ApiResult<SignatureAndHashAlgorithm> {
        let hash = match H::name() {
            "SHA-224" => HashAlgorithm::Sha224,
            "SHA-256" => HashAlgorithm::Sha256,
            "SHA-384" => HashAlgorithm::Sha384,
            "SHA-512" => HashAlgorithm::Sha512,
            other => {
                return Err(ApiError::InvalidParameter {
                    context: "ECDSA hash",
                    message: format!("{} has no wire hash algorithm code", other),
                })
            }
        };
        Ok(SignatureAndHashAlgorithm::new(hash, SignatureAlgorithm::Ecdsa))
    }

    /// Sign `message` and frame the DER signature as `DigitallySigned`
    pub fn sign_digitally_signed<R: CryptoRng + RngCore>(
        &self,
        secret: &SecretScalar,
        message: &[u8],
        rng: &mut R,
    ) -> ApiResult<DigitallySigned> {
        let algorithm = Self::algorithm()?;
        let signature = self.sign(secret, message, rng)?;
        DigitallySigned::new(algorithm, signature.to_der())
    }

    /// Verify a `DigitallySigned` structure
    ///
    /// A mismatched algorithm pair or malformed DER is an error; a
    /// well-formed signature that does not match returns `false`.
    pub fn verify_digitally_signed(
        &self,
        public: &PublicKey,
        signed: &DigitallySigned,
        message: &[u8],
    ) -> ApiResult<bool> {
        let expected = Self::algorithm()?;
        if signed.algorithm != expected {
            return Err(ApiError::InvalidSignature {
                context: "DigitallySigned",
                message: format!(
                    "algorithm {:?}/{:?} does not match {:?}/{:?}",
                    signed.algorithm.hash,
                    signed.algorithm.signature,
                    expected.hash,
                    expected.signature
                ),
            });
        }
        let signature = EcdsaSignature::from_der(signed.signature.as_bytes())?;
        self.verify(public, &signature, message)
    }
}

impl<H: HashFunction> Signature for Ecdsa<H> {
    type PublicKey = PublicKey;
    type SecretKey = SecretScalar;
    type SignatureData = EcdsaSignature;
    type KeyPair = KeyPair;

    fn name(&self) -> String {
        format!("ECDSA-{}-{}", self.curve.name(), H::name())
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        self.generate_keypair(rng)
    }

    fn public_key(keypair: &KeyPair) -> PublicKey {
        keypair.public().clone()
    }

    fn secret_key(keypair: &KeyPair) -> SecretScalar {
        keypair.secret().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &SecretScalar,
        rng: &mut R,
    ) -> ApiResult<EcdsaSignature> {
        Ecdsa::<H>::sign(self, secret_key, message, rng)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &EcdsaSignature,
        public_key: &PublicKey,
    ) -> ApiResult<bool> {
        Ecdsa::<H>::verify(self, public_key, signature, message)
    }
}
