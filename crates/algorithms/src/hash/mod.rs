//! Digest adapters
//!
//! Thin wrappers that expose the SHA-2 family through
//! [`jcurve_api::HashFunction`], so signature schemes can be generic over
//! the digest.

use jcurve_api::HashFunction;
use sha2::Digest;

macro_rules! sha2_adapter {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $size:expr, $label:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl HashFunction for $name {
            const OUTPUT_SIZE: usize = $size;

            fn name() -> &'static str {
                $label
            }

            fn digest(data: &[u8]) -> Vec<u8> {
                <$inner>::digest(data).to_vec()
            }
        }
    };
}

sha2_adapter!(
    /// SHA-224 (FIPS 180-4)
    Sha224, sha2::Sha224, 28, "SHA-224"
);
sha2_adapter!(
    /// SHA-256 (FIPS 180-4)
    Sha256, sha2::Sha256, 32, "SHA-256"
);
sha2_adapter!(
    /// SHA-384 (FIPS 180-4)
    Sha384, sha2::Sha384, 48, "SHA-384"
);
sha2_adapter!(
    /// SHA-512 (FIPS 180-4)
    Sha512, sha2::Sha512, 64, "SHA-512"
);
