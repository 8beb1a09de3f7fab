//! ECDSA signature values and their encodings

use num_bigint::BigUint;

use jcurve_algorithms::ec::Curve;
use jcurve_api::{Error as ApiError, Result as ApiResult, Serialize};
use jcurve_common::math_common::to_fixed_be;
use jcurve_common::wire::{SignatureMessage, WireFormat};

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// ECDSA signature components (r, s) as big-endian byte strings
///
/// Signatures produced by [`Ecdsa`](super::Ecdsa) carry both components at
/// the curve's scalar width. Decoded signatures keep whatever width the
/// encoding used; range checks happen during verification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EcdsaSignature {
    components: SignatureMessage,
}

impl EcdsaSignature {
    /// Build from integers, padding both to the curve's scalar width
    pub fn from_scalars(curve: &Curve, r: &BigUint, s: &BigUint) -> ApiResult<Self> {
        let len = curve.scalar_len();
        Self::from_components(&to_fixed_be(r, len), &to_fixed_be(s, len))
    }

    /// Build from raw big-endian components
    pub fn from_components(r: &[u8], s: &[u8]) -> ApiResult<Self> {
        Ok(Self {
            components: SignatureMessage::new(r, s)?,
        })
    }

    /// r bytes
    pub fn r(&self) -> &[u8] {
        self.components.r.as_bytes()
    }

    /// s bytes
    pub fn s(&self) -> &[u8] {
        self.components.s.as_bytes()
    }

    /// r as an integer
    pub fn r_uint(&self) -> BigUint {
        BigUint::from_bytes_be(self.r())
    }

    /// s as an integer
    pub fn s_uint(&self) -> BigUint {
        BigUint::from_bytes_be(self.s())
    }

    /// The wire message for this signature
    pub fn to_message(&self) -> &SignatureMessage {
        &self.components
    }

    /// Serialize to DER: SEQUENCE { INTEGER r, INTEGER s }
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(self.r());
        let s = encode_integer(self.s());

        let mut body = Vec::with_capacity(r.len() + s.len() + 8);
        body.push(DER_INTEGER);
        encode_length(&mut body, r.len());
        body.extend_from_slice(&r);
        body.push(DER_INTEGER);
        encode_length(&mut body, s.len());
        body.extend_from_slice(&s);

        let mut der = Vec::with_capacity(body.len() + 4);
        der.push(DER_SEQUENCE);
        encode_length(&mut der, body.len());
        der.extend_from_slice(&body);
        der
    }

    /// Parse a DER signature
    ///
    /// The parser is strict: definite minimal lengths, no trailing bytes,
    /// and non-negative integers only.
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        let mut reader = DerReader { input: der, pos: 0 };

        reader.expect_tag(DER_SEQUENCE)?;
        let seq_len = reader.length()?;
        if seq_len != reader.remaining() {
            return Err(der_error("SEQUENCE length does not match input"));
        }

        let r = reader.integer()?;
        let s = reader.integer()?;
        if reader.remaining() != 0 {
            return Err(der_error("trailing bytes after INTEGER s"));
        }

        Self::from_components(&r, &s)
    }
}

impl Serialize for EcdsaSignature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self {
            components: SignatureMessage::from_wire(bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.components.to_wire()
    }
}

fn der_error(message: &str) -> ApiError {
    ApiError::InvalidSignature {
        context: "ECDSA DER parsing",
        message: message.to_string(),
    }
}

/// Minimal two's-complement form of a non-negative big-endian integer
fn encode_integer(bytes: &[u8]) -> Vec<u8> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let trimmed = &bytes[first..];
    if trimmed.is_empty() {
        return vec![0x00];
    }
    let mut out = Vec::with_capacity(trimmed.len() + 1);
    // Leading zero keeps the high bit from reading as a sign
    if trimmed[0] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(trimmed);
    out
}

fn encode_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    out.push(0x80 | (bytes.len() - first) as u8);
    out.extend_from_slice(&bytes[first..]);
}

struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    fn byte(&mut self) -> ApiResult<u8> {
        let b = *self
            .input
            .get(self.pos)
            .ok_or_else(|| der_error("unexpected end of input"))?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, len: usize) -> ApiResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(der_error("length exceeds input"));
        }
        let slice = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn expect_tag(&mut self, tag: u8) -> ApiResult<()> {
        if self.byte()? != tag {
            return Err(der_error("unexpected tag"));
        }
        Ok(())
    }

    fn length(&mut self) -> ApiResult<usize> {
        let first = self.byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 2 {
            return Err(der_error("unsupported length form"));
        }
        let bytes = self.take(count)?;
        if bytes[0] == 0 {
            return Err(der_error("non-minimal length"));
        }
        let len = bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
        if len < 0x80 {
            return Err(der_error("non-minimal length"));
        }
        Ok(len)
    }

    fn integer(&mut self) -> ApiResult<Vec<u8>> {
        self.expect_tag(DER_INTEGER)?;
        let len = self.length()?;
        let bytes = self.take(len)?;
        match bytes {
            [] => Err(der_error("empty INTEGER")),
            [b, ..] if b & 0x80 != 0 => Err(der_error("negative INTEGER")),
            [0x00, next, ..] if next & 0x80 == 0 => Err(der_error("non-minimal INTEGER")),
            [0x00, rest @ ..] => Ok(rest.to_vec()),
            _ => Ok(bytes.to_vec()),
        }
    }
}
