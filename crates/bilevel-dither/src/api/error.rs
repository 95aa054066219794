//! Unified error type for the bilevel-dither public API.
//!
//! Every fallible operation checks its preconditions up front and returns a
//! [`DitherError`] before any output is produced.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DitherError>;

/// Errors reported by the dithering and metrics operations.
///
/// # Example
///
/// ```
/// use bilevel_dither::{DitherError, Method};
///
/// let err = "atkinson".parse::<Method>().unwrap_err();
/// assert!(matches!(err, DitherError::UnknownMethod(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitherError {
    /// Method selector is not one of `bayer`, `fs`, `stucki`, `jjn`, `rong`.
    #[error("Unknown dither method: {0}")]
    UnknownMethod(String),

    /// Two buffers handed to a metric have different dimensions.
    #[error("Dimension mismatch: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Width and height of the reference buffer
        left: (u32, u32),
        /// Width and height of the compared buffer
        right: (u32, u32),
    },

    /// SSIM needs at least one window center, i.e. both sides > 10 pixels.
    #[error("Image too small for SSIM: {width}x{height} (both sides must exceed 10px)")]
    DegenerateRegion { width: u32, height: u32 },

    /// Raw RGBA data does not cover `width * height` pixels.
    #[error("Invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },
}
