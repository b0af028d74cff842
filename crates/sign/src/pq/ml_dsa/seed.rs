//! Seed normalization
//!
//! Wallet seeds are 48 bytes while ML-DSA key generation takes a 32-byte
//! `xi`. Every implementation bridges the two the same way: `xi` is the
//! SHA-256 digest of the seed, used verbatim.

use core::fmt;

use sha2::{Digest, Sha256};
use xverify_common::{SecretBuffer, ZeroizeGuard};
use xverify_params::utils::hash::SHA256_OUTPUT_SIZE;
use xverify_params::wallet::SEED_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error as SignError;

/// 32-byte key generation input derived from a wallet seed
///
/// Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExpansionInput(SecretBuffer<SHA256_OUTPUT_SIZE>);

impl ExpansionInput {
    /// Wrap an already-normalized 32-byte value
    pub fn from_bytes(bytes: [u8; SHA256_OUTPUT_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Borrow the raw 32 bytes
    pub fn as_bytes(&self) -> &[u8; SHA256_OUTPUT_SIZE] {
        self.0.as_array()
    }
}

impl fmt::Debug for ExpansionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExpansionInput([REDACTED])")
    }
}

/// Hash a 48-byte seed into the key generation input
///
/// The length is checked before anything is hashed.
pub(crate) fn normalize_internal(seed: &[u8]) -> Result<ExpansionInput, SignError> {
    if seed.len() != SEED_SIZE {
        return Err(SignError::InvalidSeedSize {
            expected: SEED_SIZE,
            actual: seed.len(),
        });
    }

    let mut digest = Sha256::digest(seed);
    let mut xi = [0u8; SHA256_OUTPUT_SIZE];
    xi.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();

    let guard = ZeroizeGuard::new(&mut xi);
    Ok(ExpansionInput::from_bytes(*guard))
}
