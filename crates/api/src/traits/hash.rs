//! Message digest seam used by signature schemes

/// A one-shot cryptographic hash function
///
/// Signature schemes are generic over this trait so the digest can be
/// chosen independently of the curve.
pub trait HashFunction {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Algorithm name, e.g. `"SHA-256"`
    fn name() -> &'static str;

    /// Hash `data` in one call
    fn digest(data: &[u8]) -> Vec<u8>;
}
