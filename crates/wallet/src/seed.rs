//! Wallet seed (48 bytes) and extended seed (descriptor ‖ seed, 51 bytes)

use core::fmt;

use rand::{CryptoRng, RngCore};
use xverify_api::error::validate;
use xverify_api::Result;
use xverify_common::SecretBuffer;
use xverify_params::wallet::{DESCRIPTOR_SIZE, EXTENDED_SEED_SIZE, SEED_SIZE};
use xverify_sign::ExpansionInput;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bytes::decode_hex_like;
use crate::descriptor::Descriptor;

/// 48-byte wallet seed
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(SecretBuffer<SEED_SIZE>);

impl Seed {
    /// Wrap an array
    pub fn new(bytes: [u8; SEED_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Copy from a slice of exactly 48 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::seed_length("seed", bytes.len(), SEED_SIZE)?;
        let mut buffer = SecretBuffer::zeroed();
        buffer.as_mut_slice().copy_from_slice(bytes);
        Ok(Self(buffer))
    }

    /// Parse from hex, with optional `0x` prefix and separators
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = decode_hex_like("seed", input)?;
        Self::from_bytes(&bytes)
    }

    /// Fresh random seed
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut buffer = SecretBuffer::zeroed();
        rng.fill_bytes(buffer.as_mut_slice());
        Self(buffer)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        self.0.as_array()
    }

    /// Lowercase hex without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_slice())
    }

    /// SHA-256 of the seed, the ML-DSA key generation input
    pub fn expansion_input(&self) -> Result<ExpansionInput> {
        xverify_sign::normalize(self.0.as_slice())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Descriptor followed by seed, the portable form of a wallet
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedSeed {
    #[zeroize(skip)]
    descriptor: Descriptor,
    seed: Seed,
}

impl ExtendedSeed {
    /// Join a descriptor and a seed
    pub fn new(descriptor: Descriptor, seed: Seed) -> Self {
        Self { descriptor, seed }
    }

    /// Split a slice of exactly 51 bytes; the descriptor must be valid
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::seed_length("extended seed", bytes.len(), EXTENDED_SEED_SIZE)?;
        let descriptor = Descriptor::from_bytes(&bytes[..DESCRIPTOR_SIZE])?;
        let seed = Seed::from_bytes(&bytes[DESCRIPTOR_SIZE..])?;
        Ok(Self { descriptor, seed })
    }

    /// Parse from hex, with optional `0x` prefix and separators
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = decode_hex_like("extended seed", input)?;
        Self::from_bytes(&bytes)
    }

    /// Descriptor part
    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    /// Seed part
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Encoded form, wiped when dropped
    pub fn to_bytes(&self) -> SecretBuffer<EXTENDED_SEED_SIZE> {
        let mut buffer = SecretBuffer::zeroed();
        buffer.as_mut_slice()[..DESCRIPTOR_SIZE].copy_from_slice(&self.descriptor.to_bytes());
        buffer.as_mut_slice()[DESCRIPTOR_SIZE..].copy_from_slice(self.seed.as_bytes());
        buffer
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for ExtendedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtendedSeed([REDACTED])")
    }
}
