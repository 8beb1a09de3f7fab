//! Key and signature messages

use super::{ByteVector, WireFormat};
use jcurve_api::Result;

/// Ceiling of each coordinate or scalar vector
pub const COMPONENT_CEILING: usize = 1024;

/// A public key as two big-endian coordinate strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKeyMessage {
    pub x: ByteVector<COMPONENT_CEILING>,
    pub y: ByteVector<COMPONENT_CEILING>,
}

impl PublicKeyMessage {
    pub fn new(x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            x: ByteVector::new(x)?,
            y: ByteVector::new(y)?,
        })
    }
}

impl WireFormat for PublicKeyMessage {
    fn encoded_len(&self) -> usize {
        self.x.encoded_len() + self.y.encoded_len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.x.encode_into(out);
        self.y.encode_into(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let (x, used) = ByteVector::decode(input)?;
        let (y, more) = ByteVector::decode(&input[used..])?;
        Ok((Self { x, y }, used + more))
    }
}

/// An ECDSA signature as two big-endian scalar strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureMessage {
    pub r: ByteVector<COMPONENT_CEILING>,
    pub s: ByteVector<COMPONENT_CEILING>,
}

impl SignatureMessage {
    pub fn new(r: impl Into<Vec<u8>>, s: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            r: ByteVector::new(r)?,
            s: ByteVector::new(s)?,
        })
    }
}

impl WireFormat for SignatureMessage {
    fn encoded_len(&self) -> usize {
        self.r.encoded_len() + self.s.encoded_len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.r.encode_into(out);
        self.s.encode_into(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let (r, used) = ByteVector::decode(input)?;
        let (s, more) = ByteVector::decode(&input[used..])?;
        Ok((Self { r, s }, used + more))
    }
}
