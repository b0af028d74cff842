//! Constant values for the xverify workspace
//!
//! Sizes for the ML-DSA-87 parameter set, the wallet byte layouts built
//! around it, and the shared interoperability test vector. Every
//! implementation taking part in cross-verification must agree on these.

#![no_std]

pub mod pqc;
pub mod utils;
pub mod vectors;
pub mod wallet;
