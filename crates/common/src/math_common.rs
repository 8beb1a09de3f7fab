//! Common mathematical operations for cryptographic algorithms
//!
//! All functions operate on arbitrary-precision unsigned integers. None of
//! them run in constant time.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Perform modular exponentiation (a^b mod m)
///
/// Returns zero when `m` is 0 or 1.
pub fn mod_exp(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if m.is_zero() || m.is_one() {
        return BigUint::zero();
    }
    a.modpow(b, m)
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Tracks the Bézout coefficient of `a` alongside the remainder sequence.
/// Returns `None` when `m <= 1`, when `a ≡ 0 (mod m)`, and whenever
/// `gcd(a, m) != 1`. The result lies in `[1, m)`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m <= &BigUint::one() {
        return None; // No modular inverse exists
    }

    let a = a % m;
    if a.is_zero() {
        return None; // No modular inverse exists for 0
    }

    let modulus = BigInt::from(m.clone());
    let (mut old_r, mut r) = (BigInt::from(a), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None; // Not coprime
    }

    old_s.mod_floor(&modulus).to_biguint()
}

/// Fermat inverse a^(p-2) mod p
///
/// Only correct when `p` is prime. Returns `None` for `p < 2` or
/// `a ≡ 0 (mod p)`.
pub fn mod_inverse_prime(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let two = BigUint::from(2u32);
    if p < &two || (a % p).is_zero() {
        return None;
    }
    Some(a.modpow(&(p - &two), p))
}

/// Big-endian encoding left-padded with zeros to `len` bytes
///
/// A value wider than `len` is returned at its natural width. Zero encodes
/// as `len` zero bytes, so a zero-width request yields an empty buffer.
pub fn to_fixed_be(value: &BigUint, len: usize) -> Vec<u8> {
    if value.is_zero() {
        return vec![0u8; len];
    }
    let bytes = value.to_bytes_be();
    if bytes.len() >= len {
        return bytes;
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}
