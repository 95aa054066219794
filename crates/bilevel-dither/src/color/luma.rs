//! BT.601 luma and grayscale detection.

use crate::buffer::PixelBuffer;

/// BT.601 red weight.
const LUMA_R: f64 = 0.299;
/// BT.601 green weight.
const LUMA_G: f64 = 0.587;
/// BT.601 blue weight.
const LUMA_B: f64 = 0.114;

/// Weighted luma `0.299r + 0.587g + 0.114b`.
#[inline]
pub fn rgb_to_luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Luma of a packed `[R, G, B, A]` pixel; alpha is ignored.
#[inline]
pub fn pixel_luma(px: [u8; 4]) -> f64 {
    rgb_to_luma(px[0] as f64, px[1] as f64, px[2] as f64)
}

/// True iff every pixel has `r == g == b`. Alpha is ignored.
///
/// Callers use this to choose between the single-luma-plane path and the
/// three-channel path. An empty buffer is grayscale.
pub fn is_grayscale(buffer: &PixelBuffer) -> bool {
    buffer.pixels().all(|[r, g, b, _]| r == g && g == b)
}
