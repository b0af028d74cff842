//! Public API traits and types for the xverify workspace
//!
//! This crate provides the shared error taxonomy and the trait that every
//! signature backend in the workspace implements. Member crates convert
//! their local errors into [`Error`] at their public boundary so callers
//! (test harnesses, the CLI) can match on a single, distinct set of kinds.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{PublicKeyBytes, Signature, SignatureBytes, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::signature;
