//! Prime field arithmetic
//!
//! A [`PrimeField`] is a shared handle on a modulus; it mints
//! [`FieldElement`]s whose values are always fully reduced into `[0, m)`.
//! Elements are immutable and every operation returns a new element.
//!
//! The modulus is not checked for primality. Inversion works for any unit
//! and reports [`Error::NoInverse`](crate::error::Error::NoInverse) for the
//! rest, which lets composite toy moduli exercise the error paths.

mod element;


pub use element::FieldElement;

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{validate, Error, Result};

/// The integers modulo `m`
#[derive(Clone)]
pub struct PrimeField {
    modulus: Arc<BigUint>,
}

impl PrimeField {
    /// Create a field for `modulus`, which must be at least 2
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(modulus >= BigUint::from(2u32), "modulus", "must be at least 2")?;
        Ok(Self {
            modulus: Arc::new(modulus),
        })
    }

    /// Create a field from a big-endian hexadecimal modulus
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::new(parse_hex("modulus", hex)?)
    }

    /// The modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Bytes needed to hold any element in fixed-width big-endian form
    pub fn byte_len(&self) -> usize {
        ((self.bits() + 7) / 8) as usize
    }

    /// Reduce `value` into the field
    pub fn element(&self, value: BigUint) -> FieldElement {
        let value = if value < *self.modulus {
            value
        } else {
            value % &*self.modulus
        };
        FieldElement::from_reduced(value, self.clone())
    }

    /// Reduce a machine integer into the field
    pub fn element_from_u64(&self, value: u64) -> FieldElement {
        self.element(BigUint::from(value))
    }

    /// Reduce a signed integer into the field, so `-3` maps to `m - 3`
    pub fn element_from_signed(&self, value: &BigInt) -> FieldElement {
        let modulus = BigInt::from((*self.modulus).clone());
        let reduced = value.mod_floor(&modulus);
        // mod_floor by a positive modulus is never negative
        let magnitude = reduced.magnitude().clone();
        FieldElement::from_reduced(magnitude, self.clone())
    }

    /// Interpret big-endian bytes as an integer and reduce it
    pub fn from_bytes_be(&self, bytes: &[u8]) -> FieldElement {
        self.element(BigUint::from_bytes_be(bytes))
    }

    /// The additive identity
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::zero(), self.clone())
    }

    /// The multiplicative identity
    pub fn one(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::one(), self.clone())
    }

    /// Whether `element` belongs to this field
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.field() == self
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeField(0x{:x})", *self.modulus)
    }
}

/// Parse a big-endian hexadecimal literal
pub(crate) fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or_else(|| Error::param(name, "not a hexadecimal integer"))
}
