//! Digital signature traits for xverify
//!
//! Signing and verification always take an explicit application context so
//! that a signature is bound to exactly one (key, context, message) triple.
//! Secret keys are opaque and zeroizable; they are never byte-accessible
//! through these traits.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for context-aware signature algorithms
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Borrow the secret key of a key pair
    fn secret_key(keypair: &Self::KeyPair) -> &Self::SecretKey;

    /// Sign `message` under `context`
    ///
    /// Randomized schemes may return different signatures for the same
    /// input; every one of them must verify.
    fn sign(
        context: &[u8],
        message: &[u8],
        secret_key: &Self::SecretKey,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a context, message and public key
    ///
    /// Returns `Ok(false)` for any structurally valid input that does not
    /// verify. Errors are reserved for inputs that cannot be interpreted.
    fn verify(
        context: &[u8],
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}

/// Signature algorithms that derive keys deterministically from a seed
pub trait SignatureDerive: Signature {
    /// Exact seed size in bytes
    const SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// The same seed must always produce the same key pair, in this process
    /// and in any other conforming implementation.
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;
}

/// Extension trait for public key types that have a byte representation
pub trait PublicKeyBytes: Sized {
    /// Create from byte representation
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Borrow the byte representation
    fn as_bytes(&self) -> &[u8];
}

/// Extension trait for signature types that have a byte representation
pub trait SignatureBytes: Sized {
    /// Create from byte representation
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Borrow the byte representation
    fn as_bytes(&self) -> &[u8];
}
