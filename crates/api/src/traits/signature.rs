//! Digital signature traits for jcurve
//!
//! Curves are runtime values in jcurve, so schemes are objects bound to a
//! curve and every operation takes `&self`.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable
    ///
    /// # Security Note
    ///
    /// This type should not implement `AsMut<[u8]>` to prevent corruption
    /// of key material.
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name(&self) -> String;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// Randomized schemes draw their per-signature nonce from `rng`.
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(false)` for a well-formed but non-matching signature;
    /// errors are reserved for unusable keys.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
