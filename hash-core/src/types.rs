//! Shared types used across the crate.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// Error for an explicitly requested CPU feature that the host doesn't
/// support.
///
/// The zero-configuration `hash`/`bytesum`/`generate`/streaming entry
/// points never return this — they always fall back to the portable
/// backend. It exists only for the advanced, explicit-backend-selection
/// API used by the cross-backend consistency tests and the verification
/// binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    #[must_use]
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required CPU feature '{}' is not available", self.missing)
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}
