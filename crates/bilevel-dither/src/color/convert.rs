//! Packing and unpacking between [`PixelBuffer`] and [`Plane`]s.

use crate::buffer::{PixelBuffer, Plane};

use super::luma::pixel_luma;

/// Extract the luma plane of a buffer.
///
/// Luma is computed in `f64` and stored as `f32`.
pub fn luma_plane(buffer: &PixelBuffer) -> Plane {
    let samples = buffer.pixels().map(|px| pixel_luma(px) as f32).collect();
    Plane::new(
        buffer.width() as usize,
        buffer.height() as usize,
        samples,
    )
}

/// Split a buffer into independent red, green and blue planes.
pub fn rgb_planes(buffer: &PixelBuffer) -> [Plane; 3] {
    let n = buffer.pixel_count();
    let mut r = Vec::with_capacity(n);
    let mut g = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    for [pr, pg, pb, _] in buffer.pixels() {
        r.push(pr as f32);
        g.push(pg as f32);
        b.push(pb as f32);
    }
    let (w, h) = (buffer.width() as usize, buffer.height() as usize);
    [Plane::new(w, h, r), Plane::new(w, h, g), Plane::new(w, h, b)]
}

/// Clamp a working sample to `0..=255` and round to the nearest byte.
///
/// Halfway values round to even; NaN maps to 0.
#[inline]
pub fn quantize_sample(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

impl PixelBuffer {
    /// Pack a single plane into an opaque gray buffer (`R = G = B`).
    pub fn from_luma_plane(plane: &Plane) -> Self {
        let data = plane
            .samples()
            .iter()
            .flat_map(|&v| {
                let byte = quantize_sample(v);
                [byte, byte, byte, 255]
            })
            .collect();
        Self::from_raw_unchecked(plane.width() as u32, plane.height() as u32, data)
    }

    /// Pack three same-size planes into an opaque RGB buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the three planes share dimensions.
    pub fn from_rgb_planes(planes: &[Plane; 3]) -> Self {
        let [r, g, b] = planes;
        debug_assert!(
            r.width() == g.width()
                && g.width() == b.width()
                && r.height() == g.height()
                && g.height() == b.height(),
            "channel planes must share dimensions"
        );
        let data = r
            .samples()
            .iter()
            .zip(g.samples())
            .zip(b.samples())
            .flat_map(|((&r, &g), &b)| {
                [
                    quantize_sample(r),
                    quantize_sample(g),
                    quantize_sample(b),
                    255,
                ]
            })
            .collect();
        Self::from_raw_unchecked(r.width() as u32, r.height() as u32, data)
    }
}
