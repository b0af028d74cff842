//! Security primitives and memory safety utilities

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};
