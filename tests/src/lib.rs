//! Shared fixtures for the jcurve integration tests

use jcurve_algorithms::ec::Curve;
use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y² = x³ + 2x + 2 over F₁₇ with G = (5, 1) of prime order 19
pub static TOY_CURVE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(
        "toy-17",
        BigUint::from(17u32),
        BigInt::from(2),
        BigInt::from(2),
        (BigUint::from(5u32), BigUint::from(1u32)),
        BigUint::from(19u32),
    )
    .expect("toy curve parameters are valid")
});

/// Affine multiples kG of the toy generator for k = 1..=18
pub const TOY_MULTIPLES: [(u32, u32); 18] = [
    (5, 1),
    (6, 3),
    (10, 6),
    (3, 1),
    (9, 16),
    (16, 13),
    (0, 6),
    (13, 7),
    (7, 6),
    (7, 11),
    (13, 10),
    (0, 11),
    (16, 4),
    (9, 1),
    (3, 16),
    (10, 11),
    (6, 14),
    (5, 16),
];

/// A reproducible RNG for a test
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a big-endian hex integer
pub fn uint_from_hex(hex_str: &str) -> BigUint {
    BigUint::from_bytes_be(&hex::decode(hex_str).expect("valid hex"))
}
