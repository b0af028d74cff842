//! Three-byte wallet descriptor: `[wallet type, metadata0, metadata1]`

use xverify_api::error::validate;
use xverify_api::Result;
use xverify_params::wallet::DESCRIPTOR_SIZE;

use crate::bytes::decode_hex_like;
use crate::wallet_type::WalletType;

/// Wallet descriptor
///
/// Always names a supported wallet type; the two metadata bytes are carried
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    wallet_type: WalletType,
    metadata: [u8; 2],
}

impl Descriptor {
    /// Build a descriptor from its parts
    pub fn new(wallet_type: WalletType, metadata: [u8; 2]) -> Result<Self> {
        Self::from_bytes(&[wallet_type.as_byte(), metadata[0], metadata[1]])
    }

    /// ML-DSA-87 descriptor with the given metadata
    pub fn ml_dsa_87(metadata: [u8; 2]) -> Self {
        Self {
            wallet_type: WalletType::MlDsa87,
            metadata,
        }
    }

    /// Parse exactly three bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::parameter(
            bytes.len() == DESCRIPTOR_SIZE,
            "descriptor",
            "descriptor must be exactly 3 bytes",
        )?;
        Ok(Self {
            wallet_type: WalletType::supported_from_byte(bytes[0])?,
            metadata: [bytes[1], bytes[2]],
        })
    }

    /// Parse from hex, with optional `0x` prefix and separators
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = decode_hex_like("descriptor", input)?;
        Self::from_bytes(&bytes)
    }

    /// Wallet type named by the first byte
    pub fn wallet_type(&self) -> WalletType {
        self.wallet_type
    }

    /// The two metadata bytes
    pub fn metadata(&self) -> [u8; 2] {
        self.metadata
    }

    /// Encoded form
    pub fn to_bytes(&self) -> [u8; DESCRIPTOR_SIZE] {
        [self.wallet_type.as_byte(), self.metadata[0], self.metadata[1]]
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::ml_dsa_87([0, 0])
    }
}
