//! Validation utilities shared by the pipeline stages

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::parameter(context, reason));
    }
    Ok(())
}

/// Validate a seed length
#[inline(always)]
pub fn seed_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidSeedLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
