//! Address derivation seam
//!
//! The address scheme is not fixed yet. Wallets take an [`AddressDeriver`]
//! so a real scheme can be plugged in without touching the signing path;
//! until then [`PlaceholderAddress`] fills the `address` field with a
//! constant marker.

use xverify_params::vectors::ADDRESS_PLACEHOLDER;
use xverify_sign::MlDsa87PublicKey;

use crate::descriptor::Descriptor;

/// Maps a wallet's public identity to its address string
///
/// Implementations must be deterministic and must only look at public data.
pub trait AddressDeriver {
    /// Address for the given descriptor and public key
    fn address(&self, descriptor: &Descriptor, public_key: &MlDsa87PublicKey) -> String;
}

/// Stand-in deriver that always yields the shared placeholder value
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAddress;

impl AddressDeriver for PlaceholderAddress {
    fn address(&self, _descriptor: &Descriptor, _public_key: &MlDsa87PublicKey) -> String {
        ADDRESS_PLACEHOLDER.to_string()
    }
}
