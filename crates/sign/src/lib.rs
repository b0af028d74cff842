//! Digital signatures for xverify
//!
//! This crate turns a 48-byte wallet seed into an ML-DSA-87 key pair and
//! produces and checks context-bound signatures with it. The lattice
//! arithmetic itself comes from the `fips204` crate; this crate owns the
//! seed normalization step, the byte-exact key and signature types and the
//! zeroization of everything secret along the way.

pub mod error;
pub mod pq;

pub use pq::ml_dsa::{
    derive_keypair, normalize, sign, sign_with_rng, verify, ExpansionInput, MlDsa87,
    MlDsa87KeyPair, MlDsa87PublicKey, MlDsa87SecretKey, MlDsa87Signature,
};
