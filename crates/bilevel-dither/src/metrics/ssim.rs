//! Single-scale structural similarity (SSIM) on luma.

use crate::api::{DitherError, Result};
use crate::buffer::PixelBuffer;
use crate::color::pixel_luma;

use super::{ensure_same_dimensions, SSIM_WINDOW};

/// Half-width of the 11x11 window.
pub const SSIM_RADIUS: usize = 5;

/// `(k1 * L)²` with `k1 = 0.01`, `L = 255`.
pub const SSIM_C1: f64 = 6.5025;

/// `(k2 * L)²` with `k2 = 0.03`, `L = 255`.
pub const SSIM_C2: f64 = 58.5225;

/// Mean SSIM of the luma channels of two buffers.
///
/// Only window centers at least [`SSIM_RADIUS`] pixels away from every
/// border are evaluated; there is no padding. That leaves
/// `(width - 10) * (height - 10)` windows, so both dimensions must exceed
/// 10 or [`DitherError::DegenerateRegion`] is returned.
///
/// For each center the [`SSIM_WINDOW`]-weighted sums `μ1, μ2`, `σ1², σ2²`
/// and `σ12` give
///
/// ```text
/// ((2μ1μ2 + C1)(2σ12 + C2)) / ((μ1² + μ2² + C1)(σ1² + σ2² + C2))
/// ```
///
/// and the result is the arithmetic mean over all centers.
///
/// The window weights are used exactly as tabulated and sum to about 2.731,
/// so `μ` is a scaled mean and flat windows still carry a nonzero `σ²`.
/// Identical inputs still score exactly 1.
pub fn ssim(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<f64> {
    ensure_same_dimensions(reference, candidate)?;

    let (width, height) = reference.dimensions();
    let span = 2 * SSIM_RADIUS as u32;
    if width <= span || height <= span {
        return Err(DitherError::DegenerateRegion { width, height });
    }

    let w = width as usize;
    let h = height as usize;
    let luma_a: Vec<f64> = reference.pixels().map(pixel_luma).collect();
    let luma_b: Vec<f64> = candidate.pixels().map(pixel_luma).collect();

    let mut sum = 0.0;
    let mut count = 0usize;
    for y in SSIM_RADIUS..h - SSIM_RADIUS {
        for x in SSIM_RADIUS..w - SSIM_RADIUS {
            sum += window_index(&luma_a, &luma_b, w, x, y);
            count += 1;
        }
    }

    let mean = sum / count as f64;
    tracing::trace!(windows = count, mean, "SSIM evaluated");
    Ok(mean)
}

/// SSIM index of the window centered on `(cx, cy)`.
fn window_index(a: &[f64], b: &[f64], width: usize, cx: usize, cy: usize) -> f64 {
    let top = cy - SSIM_RADIUS;
    let left = cx - SSIM_RADIUS;

    let mut mu1 = 0.0;
    let mut mu2 = 0.0;
    for (ky, row) in SSIM_WINDOW.iter().enumerate() {
        let base = (top + ky) * width + left;
        for (kx, &weight) in row.iter().enumerate() {
            mu1 += a[base + kx] * weight;
            mu2 += b[base + kx] * weight;
        }
    }

    let mut sigma1 = 0.0;
    let mut sigma2 = 0.0;
    let mut sigma12 = 0.0;
    for (ky, row) in SSIM_WINDOW.iter().enumerate() {
        let base = (top + ky) * width + left;
        for (kx, &weight) in row.iter().enumerate() {
            let d1 = a[base + kx] - mu1;
            let d2 = b[base + kx] - mu2;
            sigma1 += weight * d1 * d1;
            sigma2 += weight * d2 * d2;
            sigma12 += weight * d1 * d2;
        }
    }

    ((2.0 * mu1 * mu2 + SSIM_C1) * (2.0 * sigma12 + SSIM_C2))
        / ((mu1 * mu1 + mu2 * mu2 + SSIM_C1) * (sigma1 + sigma2 + SSIM_C2))
}
