//! Planar float channel used as the working representation.

/// One channel of samples, one `f32` per pixel, row-major.
///
/// Values are nominally in `0.0..=255.0` but error diffusion may push
/// unvisited samples outside that range; packing back to bytes clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl Plane {
    /// Wrap samples as a plane.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `samples.len() == width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<f32>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width * height,
            "samples length ({}) must match width * height ({}x{})",
            samples.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Returns the plane width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the plane height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Mutable samples in row-major order.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }
}
