//! Fixed-width unsigned integers

use super::{read_be, write_be, WireFormat};
use jcurve_api::{Error, Result};

macro_rules! wire_uint {
    ($(#[$meta:meta])* $name:ident, $width:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(u64);

        impl $name {
            /// Encoded width in bytes
            pub const WIDTH: usize = $width;

            /// Largest representable value
            pub const MAX: u64 = u64::MAX >> (64 - 8 * $width);

            /// Wrap `value`, rejecting anything wider than the type
            pub fn new(value: u64) -> Result<Self> {
                if value > Self::MAX {
                    return Err(Error::InvalidParameter {
                        context: stringify!($name),
                        message: format!("{} exceeds {}", value, Self::MAX),
                    });
                }
                Ok(Self(value))
            }

            /// The wrapped value
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl WireFormat for $name {
            fn encoded_len(&self) -> usize {
                Self::WIDTH
            }

            fn encode_into(&self, out: &mut Vec<u8>) {
                write_be(out, self.0, Self::WIDTH);
            }

            fn decode(input: &[u8]) -> Result<(Self, usize)> {
                let value = read_be(stringify!($name), input, Self::WIDTH)?;
                Ok((Self(value), Self::WIDTH))
            }
        }
    };
}

wire_uint!(
    /// One-byte unsigned integer
    Uint8, 1
);
wire_uint!(
    /// Two-byte unsigned integer
    Uint16, 2
);
wire_uint!(
    /// Three-byte unsigned integer
    Uint24, 3
);
wire_uint!(
    /// Four-byte unsigned integer
    Uint32, 4
);
wire_uint!(
    /// Eight-byte unsigned integer
    Uint64, 8
);
