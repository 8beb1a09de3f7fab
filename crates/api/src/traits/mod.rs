//! Traits implemented by jcurve algorithms

pub mod hash;
pub mod key_agreement;
pub mod serialize;
pub mod signature;

pub use hash::HashFunction;
pub use key_agreement::KeyAgreement;
pub use serialize::Serialize;
pub use signature::Signature;
