//! # xverify
//!
//! ML-DSA-87 wallet keys, context-bound signatures and a canonical artifact
//! format for checking that two independent wallet implementations agree on
//! every byte.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xverify = "0.3"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`xverify-params`]: sizes and the shared test vector
//! - [`xverify-api`]: error taxonomy and signature traits
//! - [`xverify-sign`]: seed normalization and ML-DSA-87
//! - [`xverify-wallet`]: descriptors, seeds and wallets
//! - [`xverify-protocol`]: artifact codec and producer/consumer roles

pub use xverify_api as api;
pub use xverify_common as common;
pub use xverify_internal as internal;
pub use xverify_params as params;
pub use xverify_protocol as protocol;
pub use xverify_sign as sign;
pub use xverify_wallet as wallet;

/// Common imports for xverify users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Core traits
    pub use crate::api::{PublicKeyBytes, Signature, SignatureBytes, SignatureDerive};

    // Security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    // Scheme and wallet
    pub use crate::sign::MlDsa87;
    pub use crate::wallet::{Descriptor, ExtendedSeed, Seed, Wallet, WalletType};

    // Protocol roles
    pub use crate::protocol::{
        decode, encode, ArtifactBundle, Consumer, Producer, ProtocolConfig, Verdict,
    };
}
