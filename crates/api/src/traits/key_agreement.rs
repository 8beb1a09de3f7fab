//! Key agreement traits for jcurve

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A two-party Diffie-Hellman style key agreement
///
/// Both parties derive the same shared secret from their own secret key and
/// the peer's public key.
pub trait KeyAgreement {
    /// Public key type sent to the peer
    type PublicKey: Clone;

    /// Secret key type kept locally
    type SecretKey: Zeroize + Clone;

    /// Agreed secret
    type SharedSecret: Zeroize;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this key agreement scheme
    fn name(&self) -> String;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Derive the shared secret from a local secret and the peer's public key
    fn agree(
        &self,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
