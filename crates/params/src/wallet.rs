//! Byte layouts of wallet identity material

/// Raw wallet seed length in bytes
pub const SEED_SIZE: usize = 48;

/// Descriptor length in bytes: wallet type followed by two metadata bytes
pub const DESCRIPTOR_SIZE: usize = 3;

/// Extended seed length in bytes: descriptor followed by the seed
pub const EXTENDED_SEED_SIZE: usize = DESCRIPTOR_SIZE + SEED_SIZE;

/// Wallet type byte for SPHINCS+-256s wallets (recognised, not supported)
pub const WALLET_TYPE_SPHINCSPLUS_256S: u8 = 0;

/// Wallet type byte for ML-DSA-87 wallets
pub const WALLET_TYPE_ML_DSA_87: u8 = 1;
