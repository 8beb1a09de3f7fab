//! Algorithm identifiers and the signed-data envelope

use super::{ByteVector, WireFormat};
use jcurve_api::{Error, Result};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code),+
        }

        impl $name {
            /// Every defined code point
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric code point
            pub fn code(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(code: u8) -> Result<Self> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(Error::SerializationError {
                        context: stringify!($name),
                        message: format!("unknown code {}", other),
                    }),
                }
            }
        }

        impl WireFormat for $name {
            fn encoded_len(&self) -> usize {
                1
            }

            fn encode_into(&self, out: &mut Vec<u8>) {
                out.push(self.code());
            }

            fn decode(input: &[u8]) -> Result<(Self, usize)> {
                let code = *input.first().ok_or(Error::InvalidLength {
                    context: stringify!($name),
                    expected: 1,
                    actual: 0,
                })?;
                Ok(($name::try_from(code)?, 1))
            }
        }
    };
}

wire_enum!(
    /// Digest algorithm code points (RFC 5246, section 7.4.1.4.1)
    HashAlgorithm {
        /// No hash
        None = 0,
        Md5 = 1,
        Sha1 = 2,
        Sha224 = 3,
        Sha256 = 4,
        Sha384 = 5,
        Sha512 = 6,
    }
);

wire_enum!(
    /// Signature algorithm code points (RFC 5246, section 7.4.1.4.1)
    SignatureAlgorithm {
        Anonymous = 0,
        Rsa = 1,
        Dsa = 2,
        Ecdsa = 3,
    }
);

/// A (hash, signature) algorithm pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    pub fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        Self { hash, signature }
    }
}

impl Default for SignatureAndHashAlgorithm {
    fn default() -> Self {
        Self::new(HashAlgorithm::None, SignatureAlgorithm::Anonymous)
    }
}

impl WireFormat for SignatureAndHashAlgorithm {
    fn encoded_len(&self) -> usize {
        2
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.hash.encode_into(out);
        self.signature.encode_into(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let (hash, used) = HashAlgorithm::decode(input)?;
        let (signature, more) = SignatureAlgorithm::decode(&input[used..])?;
        Ok((Self { hash, signature }, used + more))
    }
}

/// Maximum size of a signature body inside [`DigitallySigned`]
pub const DIGITALLY_SIGNED_CEILING: usize = (1 << 16) - 1;

/// A signature tagged with the algorithms that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitallySigned {
    pub algorithm: SignatureAndHashAlgorithm,
    pub signature: ByteVector<DIGITALLY_SIGNED_CEILING>,
}

impl DigitallySigned {
    /// Wrap an encoded signature
    pub fn new(algorithm: SignatureAndHashAlgorithm, signature: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            algorithm,
            signature: ByteVector::new(signature)?,
        })
    }
}

impl WireFormat for DigitallySigned {
    fn encoded_len(&self) -> usize {
        self.algorithm.encoded_len() + self.signature.encoded_len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        self.algorithm.encode_into(out);
        self.signature.encode_into(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize)> {
        let (algorithm, used) = SignatureAndHashAlgorithm::decode(input)?;
        let (signature, more) = ByteVector::decode(&input[used..])?;
        Ok((Self { algorithm, signature }, used + more))
    }
}
