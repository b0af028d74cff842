//! Constants for post-quantum cryptographic algorithms

pub mod ml_dsa;
