//! Ordered (threshold matrix) dithering.
//!
//! Each sample is compared against a threshold taken from a periodic matrix
//! indexed by pixel position. There is no state between pixels, so the
//! result does not depend on scan order.

use crate::buffer::Plane;

use super::{Dither, BILEVEL_MAX};

/// A square, periodic threshold matrix.
///
/// `thresholds` holds `size * size` values, row-major, where each value in
/// `0..size²` appears exactly once. Pixel `(x, y)` uses cell
/// `(y mod size, x mod size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedMatrix {
    /// Period of the matrix in both directions.
    pub size: usize,
    /// Row-major threshold ranks.
    pub thresholds: &'static [u32],
}

impl OrderedMatrix {
    /// Threshold in `0.0..255.0` for the matrix cell covering `(x, y)`.
    ///
    /// `t = (M[y mod N][x mod N] + 0.5) / N² * 255`
    #[inline]
    pub fn threshold(&self, x: usize, y: usize) -> f64 {
        let n = self.size;
        let rank = self.thresholds[(y % n) * n + (x % n)] as f64;
        (rank + 0.5) / (n * n) as f64 * BILEVEL_MAX
    }

    /// True if every rank in `0..size²` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let cells = self.size * self.size;
        if self.thresholds.len() != cells {
            return false;
        }
        let mut seen = vec![false; cells];
        for &rank in self.thresholds {
            let rank = rank as usize;
            if rank >= cells || seen[rank] {
                return false;
            }
            seen[rank] = true;
        }
        true
    }
}

/// Classic 4x4 Bayer matrix, 16 threshold levels.
///
/// ```text
///     0   8   2  10
///    12   4  14   6
///     3  11   1   9
///    15   7  13   5
/// ```
pub const BAYER_4X4: OrderedMatrix = OrderedMatrix {
    size: 4,
    thresholds: &[0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5],
};

/// Ordered dithering against a threshold matrix.
///
/// With several planes (color mode) every channel is compared against the
/// same matrix cell independently; there is no joint decision across
/// channels, so colored output can show fringing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedDither {
    matrix: &'static OrderedMatrix,
}

impl OrderedDither {
    /// Ordered dithering with the given matrix.
    pub const fn new(matrix: &'static OrderedMatrix) -> Self {
        Self { matrix }
    }

    /// The matrix in use.
    pub fn matrix(&self) -> &'static OrderedMatrix {
        self.matrix
    }
}

impl Default for OrderedDither {
    fn default() -> Self {
        Self::new(&BAYER_4X4)
    }
}

impl Dither for OrderedDither {
    fn dither_planes(&self, planes: &mut [Plane]) {
        for plane in planes.iter_mut() {
            let width = plane.width();
            for (idx, sample) in plane.samples_mut().iter_mut().enumerate() {
                let t = self.matrix.threshold(idx % width, idx / width);
                *sample = if (*sample as f64) < t {
                    0.0
                } else {
                    BILEVEL_MAX as f32
                };
            }
        }
    }
}
