use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::PrimeField;
use crate::error::{Error, Result};
use jcurve_common::math_common;

/// An element of a [`PrimeField`]
///
/// The stored value is always in `[0, m)`. Binary operations expect both
/// operands to come from the same field; mixing fields is a logic error
/// caught by debug assertions.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldElement {
    value: BigUint,
    field: PrimeField,
}

impl FieldElement {
    pub(super) fn from_reduced(value: BigUint, field: PrimeField) -> Self {
        debug_assert!(value < *field.modulus());
        Self { value, field }
    }

    /// The reduced representative
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field this element lives in
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The modulus of the field
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Return true if this element is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Return true if this element is one
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self::from_reduced(value, self.field.clone())
    }

    /// Modular addition
    pub fn add(&self, other: &Self) -> Self {
        debug_assert!(self.field == other.field, "field mismatch in add");
        let mut sum = &self.value + &other.value;
        if sum >= *self.modulus() {
            sum -= self.modulus();
        }
        self.with_value(sum)
    }

    /// Modular subtraction
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.field == other.field, "field mismatch in sub");
        let diff = if self.value >= other.value {
            &self.value - &other.value
        } else {
            self.modulus() - &other.value + &self.value
        };
        self.with_value(diff)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(self.modulus() - &self.value)
    }

    /// 2 * self
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Modular multiplication
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert!(self.field == other.field, "field mismatch in mul");
        self.with_value((&self.value * &other.value) % self.modulus())
    }

    /// Multiply by a small constant
    pub fn mul_u64(&self, k: u64) -> Self {
        self.with_value((&self.value * k) % self.modulus())
    }

    /// self²
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// self^exp mod m
    pub fn pow(&self, exp: &BigUint) -> Self {
        self.with_value(math_common::mod_exp(&self.value, exp, self.modulus()))
    }

    /// Multiplicative inverse by the extended Euclidean algorithm
    ///
    /// Fails with `NoInverse` when `gcd(self, m) != 1`, in particular for zero.
    pub fn invert(&self) -> Result<Self> {
        math_common::mod_inverse(&self.value, self.modulus())
            .map(|inv| self.with_value(inv))
            .ok_or(Error::NoInverse {
                context: "field inversion",
            })
    }

    /// self / other, computed as self * other⁻¹
    pub fn div(&self, other: &Self) -> Result<Self> {
        debug_assert!(self.field == other.field, "field mismatch in div");
        let inv = other.invert().map_err(|_| Error::NoInverse {
            context: "field division",
        })?;
        Ok(self.mul(&inv))
    }

    /// Minimal big-endian encoding
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    /// Big-endian encoding left-padded to `len` bytes
    pub fn to_bytes_padded(&self, len: usize) -> Vec<u8> {
        math_common::to_fixed_be(&self.value, len)
    }

    /// Big-endian encoding at the field's full width
    pub fn to_bytes_fixed(&self) -> Vec<u8> {
        self.to_bytes_padded(self.field.byte_len())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x})", self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
