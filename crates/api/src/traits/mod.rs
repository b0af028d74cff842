//! Trait definitions implemented by the signature backends

pub mod signature;

pub use signature::{PublicKeyBytes, Signature, SignatureBytes, SignatureDerive};
