//! Constants for primitive building blocks

pub mod hash;
