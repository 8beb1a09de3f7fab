//! Byte framing for values exchanged with a transport layer
//!
//! Every framed value knows its encoded size and can write and read itself.
//! Integers are big-endian. Variable-length byte strings carry a length
//! prefix whose width is the minimal byte count that can represent the
//! vector's ceiling.

mod algorithm;
mod messages;
mod uint;
mod vector;

#[cfg(test)]
mod tests;

pub use algorithm::{DigitallySigned, HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm};
pub use algorithm::DIGITALLY_SIGNED_CEILING;
pub use messages::{PublicKeyMessage, SignatureMessage, COMPONENT_CEILING};
pub use uint::{Uint16, Uint24, Uint32, Uint64, Uint8};
pub use vector::ByteVector;

use jcurve_api::{Error, Result};

/// A value with a fixed wire representation
pub trait WireFormat: Sized {
    /// Number of bytes `encode_into` appends
    fn encoded_len(&self) -> usize;

    /// Append the encoding of `self` to `out`
    fn encode_into(&self, out: &mut Vec<u8>);

    /// Decode a value from the front of `input`
    ///
    /// Returns the value and the number of bytes consumed; trailing bytes
    /// are left for the caller.
    fn decode(input: &[u8]) -> Result<(Self, usize)>;

    /// Encode `self` into a fresh buffer
    fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Decode a value that must span all of `input`
    fn from_wire(input: &[u8]) -> Result<Self> {
        let (value, used) = Self::decode(input)?;
        if used != input.len() {
            return Err(Error::SerializationError {
                context: "wire decode",
                message: format!("{} trailing bytes", input.len() - used),
            });
        }
        Ok(value)
    }
}

/// Number of bytes needed to represent `ceiling` (1 for zero)
pub const fn prefix_width(ceiling: usize) -> usize {
    if ceiling == 0 {
        return 1;
    }
    let bits = (usize::BITS - ceiling.leading_zeros()) as usize;
    (bits + 7) / 8
}

/// Read a big-endian unsigned integer of `width` bytes from the front of `input`
pub(crate) fn read_be(context: &'static str, input: &[u8], width: usize) -> Result<u64> {
    if input.len() < width {
        return Err(Error::InvalidLength {
            context,
            expected: width,
            actual: input.len(),
        });
    }
    Ok(input[..width]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Append the low `width` bytes of `value` in big-endian order
pub(crate) fn write_be(out: &mut Vec<u8>, value: u64, width: usize) {
    let bytes = value.to_be_bytes();
    out.extend_from_slice(&bytes[bytes.len() - width..]);
}
