//! Length-prefixed byte strings

use super::{prefix_width, read_be, write_be, WireFormat};
use jcurve_api::{Error, Result};

/// A byte string of at most `CEILING` bytes
///
/// On the wire the payload is preceded by its length, written in
/// `prefix_width(CEILING)` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct ByteVector<const CEILING: usize> {
    bytes: Vec<u8>,
}

impl<const CEILING: usize> ByteVector<CEILING> {
    /// Width of the length prefix in bytes
    pub const PREFIX_WIDTH: usize = prefix_width(CEILING);

    /// Wrap `bytes`, rejecting payloads longer than the ceiling
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > CEILING {
            return Err(Error::InvalidLength {
                context: "byte vector",
                expected: CEILING,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// The payload
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the vector and return the payload
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<const CEILING: usize> AsRef<[u8]> for ByteVector<CEILING> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const CEILING: usize> TryFrom<Vec<u8>> for ByteVector<CEILING> {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

impl<const CEILING: usize> From<ByteVector<CEILING>> for Vec<u8> {
    fn from(vector: ByteVector<CEILING>) -> Self {
        vector.bytes
    }
}

impl<const CEILING: usize> WireFormat for ByteVector<CEILING> {
    fn encoded_len(&self) -> usize {
        Self::PREFIX_WIDTH + self.bytes.len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        write_be(out, self.bytes.len() as u64, Self::PREFIX_WIDTH);
        out.extend_from_slice(&self.bytes);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let len = read_be("byte vector length", input, Self::PREFIX_WIDTH)? as usize;
        if len > CEILING {
            return Err(Error::SerializationError {
                context: "byte vector",
                message: format!("length {} exceeds ceiling {}", len, CEILING),
            });
        }

        let body = &input[Self::PREFIX_WIDTH..];
        if body.len() < len {
            return Err(Error::InvalidLength {
                context: "byte vector body",
                expected: len,
                actual: body.len(),
            });
        }

        let bytes = body[..len].to_vec();
        Ok((Self { bytes }, Self::PREFIX_WIDTH + len))
    }
}
