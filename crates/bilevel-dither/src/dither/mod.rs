//! Bilevel dithering algorithms.
//!
//! Every algorithm quantizes each working sample to exactly `0` or `255`.
//!
//! # Algorithms
//!
//! - **Ordered** ([`OrderedDither`]): threshold against the periodic
//!   [`BAYER_4X4`] matrix. Stateless per pixel.
//! - **Error diffusion** ([`ErrorDiffusion`]): sequential raster scan that
//!   pushes each pixel's quantization error onto unvisited neighbors using
//!   a [`Kernel`], optionally reshaped by [`ErrorShaping`].
//!
//! # Architecture
//!
//! Both implement the [`Dither`] trait over working [`Plane`]s. The closed
//! [`Algorithm`] enum is what dispatch hands out; it holds only `'static`
//! kernel and matrix tables.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::buffer::Plane;
//! use bilevel_dither::dither::{Algorithm, Dither, ErrorShaping, KernelKind};
//!
//! let algorithm = Algorithm::diffusion(KernelKind::JarvisJudiceNinke, ErrorShaping::Rong);
//! let mut planes = [Plane::new(4, 4, vec![90.0; 16])];
//! algorithm.dither_planes(&mut planes);
//! assert!(planes[0].samples().iter().all(|&v| v == 0.0 || v == 255.0));
//! ```

mod diffusion;
mod kernel;
mod ordered;
mod shaping;

pub use diffusion::ErrorDiffusion;
pub use kernel::*;
pub use ordered::{OrderedDither, OrderedMatrix, BAYER_4X4};
pub use shaping::ErrorShaping;

use crate::buffer::Plane;

/// Value of a fully "on" output sample.
pub(crate) const BILEVEL_MAX: f64 = 255.0;

/// Error diffusion quantizes samples below this value to 0.
pub(crate) const BILEVEL_MIDPOINT: f64 = 128.0;

/// Trait for bilevel dithering algorithms.
///
/// Implementors rewrite every sample of every plane to `0.0` or `255.0`.
/// Planes are owned working copies; callers never pass a plane another
/// buffer still refers to.
pub trait Dither {
    /// Dither the planes in place.
    ///
    /// All planes must share dimensions. Multiple planes are treated as
    /// independent channels.
    fn dither_planes(&self, planes: &mut [Plane]);
}

/// A fully resolved dithering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Threshold matrix dithering.
    Ordered(OrderedDither),
    /// Kernel error diffusion with error shaping.
    Diffusion(ErrorDiffusion),
}

impl Algorithm {
    /// Ordered dithering with the 4x4 Bayer matrix.
    pub fn bayer() -> Self {
        Algorithm::Ordered(OrderedDither::new(&BAYER_4X4))
    }

    /// Error diffusion with a built-in kernel.
    pub fn diffusion(kernel: KernelKind, shaping: ErrorShaping) -> Self {
        Algorithm::Diffusion(ErrorDiffusion::new(kernel.kernel(), shaping))
    }
}

impl Dither for Algorithm {
    fn dither_planes(&self, planes: &mut [Plane]) {
        match self {
            Algorithm::Ordered(ordered) => ordered.dither_planes(planes),
            Algorithm::Diffusion(diffusion) => diffusion.dither_planes(planes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bayer_constructor() {
        match Algorithm::bayer() {
            Algorithm::Ordered(ordered) => assert_eq!(ordered.matrix(), &BAYER_4X4),
            other => panic!("expected ordered, got {other:?}"),
        }
    }

    #[test]
    fn test_diffusion_constructor() {
        match Algorithm::diffusion(KernelKind::Stucki, ErrorShaping::Rong) {
            Algorithm::Diffusion(diffusion) => {
                assert_eq!(diffusion.kernel(), &STUCKI);
                assert_eq!(diffusion.shaping(), ErrorShaping::Rong);
            }
            other => panic!("expected diffusion, got {other:?}"),
        }
    }

    #[test]
    fn test_ordered_idempotent_on_bilevel_input() {
        let samples: Vec<f32> = (0..49)
            .map(|i| if (i * 7) % 3 == 0 { 255.0 } else { 0.0 })
            .collect();
        let mut planes = [Plane::new(7, 7, samples.clone())];
        Algorithm::bayer().dither_planes(&mut planes);
        assert_eq!(planes[0].samples(), samples.as_slice());
    }
}
