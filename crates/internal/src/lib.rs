//! Internal utilities for the xverify workspace
//!
//! Not part of the public surface; other member crates use these helpers
//! where byte comparisons must not leak timing information.

pub mod constant_time;

pub use constant_time::ct_eq;
