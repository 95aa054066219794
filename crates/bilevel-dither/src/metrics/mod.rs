//! Fidelity metrics comparing a dithered buffer against its source.
//!
//! - [`psnr`]: peak signal-to-noise ratio over R, G and B.
//! - [`ssim`]: single-scale structural similarity on luma with an 11x11
//!   Gaussian window.
//!
//! Both require buffers of identical dimensions and report
//! [`DitherError::DimensionMismatch`] otherwise.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::{metrics, PixelBuffer};
//!
//! let image = PixelBuffer::filled(16, 16, [120, 60, 30, 255]);
//! let quality = metrics::compare(&image, &image).unwrap();
//! assert_eq!(quality.psnr, 99.0);
//! assert!((quality.ssim - 1.0).abs() < 1e-6);
//! ```

mod psnr;
mod ssim;
mod window;

pub use psnr::{psnr, IDENTICAL_PSNR};
pub use ssim::{ssim, SSIM_C1, SSIM_C2, SSIM_RADIUS};
pub use window::SSIM_WINDOW;

use crate::api::{DitherError, Result};
use crate::buffer::PixelBuffer;

/// PSNR and SSIM for one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityResult {
    /// Peak signal-to-noise ratio in dB; [`IDENTICAL_PSNR`] for identical input.
    pub psnr: f64,
    /// Mean structural similarity; 1.0 for identical input.
    pub ssim: f64,
}

/// Compute both metrics.
///
/// Fails without a partial result if either metric's precondition fails.
pub fn compare(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<QualityResult> {
    let ssim = ssim(reference, candidate)?;
    let psnr = psnr(reference, candidate)?;
    tracing::debug!(psnr, ssim, "Computed quality metrics");
    Ok(QualityResult { psnr, ssim })
}

/// Reject buffers of differing dimensions.
pub(crate) fn ensure_same_dimensions(a: &PixelBuffer, b: &PixelBuffer) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(DitherError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}
