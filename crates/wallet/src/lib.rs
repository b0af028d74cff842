//! Wallet identity for xverify
//!
//! A wallet is a 48-byte seed plus a 3-byte descriptor naming the wallet
//! type. The pair travels as a 51-byte extended seed; the seed alone is
//! enough to re-derive the ML-DSA-87 key pair.

mod bytes;

pub mod address;
pub mod descriptor;
pub mod seed;
pub mod wallet;
pub mod wallet_type;

pub use address::{AddressDeriver, PlaceholderAddress};
pub use descriptor::Descriptor;
pub use seed::{ExtendedSeed, Seed};
pub use wallet::Wallet;
pub use wallet_type::WalletType;
