//! Wallet type byte

use core::fmt;

use xverify_api::{Error, Result};
use xverify_params::wallet::{WALLET_TYPE_ML_DSA_87, WALLET_TYPE_SPHINCSPLUS_256S};

/// Signature scheme a wallet is built on, stored as the first descriptor byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WalletType {
    /// SPHINCS+-256s; known but not supported here
    SphincsPlus256s = WALLET_TYPE_SPHINCSPLUS_256S,
    /// ML-DSA-87
    MlDsa87 = WALLET_TYPE_ML_DSA_87,
}

impl WalletType {
    /// Byte value of this type
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Whether wallets of this type can be built by this crate
    pub fn is_supported(self) -> bool {
        matches!(self, WalletType::MlDsa87)
    }

    /// Parse a type byte, accepting only supported types
    pub fn supported_from_byte(byte: u8) -> Result<Self> {
        let wallet_type = Self::try_from(byte)?;
        if !wallet_type.is_supported() {
            return Err(Error::parameter(
                "wallet type",
                format!("{} wallets are not supported", wallet_type),
            ));
        }
        Ok(wallet_type)
    }
}

impl TryFrom<u8> for WalletType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            WALLET_TYPE_SPHINCSPLUS_256S => Ok(WalletType::SphincsPlus256s),
            WALLET_TYPE_ML_DSA_87 => Ok(WalletType::MlDsa87),
            other => Err(Error::parameter(
                "wallet type",
                format!("unknown wallet type byte {}", other),
            )),
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletType::SphincsPlus256s => f.write_str("SPHINCS+-256s"),
            WalletType::MlDsa87 => f.write_str("ML-DSA-87"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_values() {
        assert_eq!(WalletType::SphincsPlus256s.as_byte(), 0);
        assert_eq!(WalletType::MlDsa87.as_byte(), 1);
        assert_eq!(WalletType::try_from(1u8).unwrap(), WalletType::MlDsa87);
    }

    #[test]
    fn test_only_ml_dsa_87_supported() {
        assert!(WalletType::supported_from_byte(1).is_ok());
        assert!(matches!(
            WalletType::supported_from_byte(0),
            Err(Error::InvalidParameter { context: "wallet type", .. })
        ));
        assert!(WalletType::supported_from_byte(2).is_err());
        assert!(WalletType::try_from(0xFFu8).is_err());
    }
}
