//! Common implementations and shared functionality for xverify
//!
//! Secret material (seeds, expansion inputs, private keys) is always held in
//! one of the containers defined here so that its storage is overwritten on
//! every exit path.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};
