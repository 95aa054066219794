//! Peak signal-to-noise ratio.

use crate::api::Result;
use crate::buffer::PixelBuffer;

use super::ensure_same_dimensions;

/// PSNR reported when the buffers are identical.
///
/// The mathematically correct value is `+∞`; a finite sentinel keeps the
/// score in a bounded, printable range. Callers comparing against IEEE
/// semantics must special-case this value.
pub const IDENTICAL_PSNR: f64 = 99.0;

/// Squared peak sample value.
const PEAK_SQUARED: f64 = 255.0 * 255.0;

/// PSNR in dB over the red, green and blue channels; alpha is excluded.
///
/// `MSE = Σ(Δr² + Δg² + Δb²) / (pixels * 3)`, `PSNR = 10·log10(255² / MSE)`.
/// Returns exactly [`IDENTICAL_PSNR`] when `MSE == 0` (this includes empty
/// buffers, which have no differing samples).
pub fn psnr(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<f64> {
    ensure_same_dimensions(reference, candidate)?;

    let squared_sum: u64 = reference
        .pixels()
        .zip(candidate.pixels())
        .map(|(a, b)| {
            (0..3)
                .map(|c| {
                    let d = a[c] as i64 - b[c] as i64;
                    (d * d) as u64
                })
                .sum::<u64>()
        })
        .sum();

    if squared_sum == 0 {
        return Ok(IDENTICAL_PSNR);
    }

    let mse = squared_sum as f64 / (reference.pixel_count() * 3) as f64;
    Ok(10.0 * (PEAK_SQUARED / mse).log10())
}
