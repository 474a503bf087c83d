//! Validation helpers used at API boundaries
//!
//! These keep the length and parameter checks that guard every cipher entry
//! point in one place, so the error variants stay consistent across crates.

use super::types::{Error, Result};

/// Validates that `actual` equals the `expected` length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validates a key length, reporting an `InvalidKey` error on mismatch
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        #[cfg(feature = "std")]
        return Err(Error::InvalidKey {
            context,
            message: format!("expected {} key bytes, got {}", expected, actual),
        });
        #[cfg(not(feature = "std"))]
        return Err(Error::InvalidKey { context });
    }
    Ok(())
}

/// Validates an arbitrary precondition, reporting `InvalidParameter` when it fails
pub fn parameter(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        #[cfg(feature = "std")]
        return Err(Error::InvalidParameter {
            context,
            message: details.into(),
        });
        #[cfg(not(feature = "std"))]
        {
            let _ = details;
            return Err(Error::InvalidParameter { context });
        }
    }
    Ok(())
}
