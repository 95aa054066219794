//! Kernel-driven error diffusion.

use crate::buffer::Plane;

use super::{Dither, ErrorShaping, Kernel, BILEVEL_MAX, BILEVEL_MIDPOINT};

/// Error diffusion with a kernel and an error-shaping strategy.
///
/// # Algorithm
///
/// A single raster scan (top to bottom, left to right) over the working
/// planes. For every pixel and every plane:
///
/// 1. Read the current value, which may already carry diffused error.
/// 2. Quantize to `0` below 128, otherwise `255`.
/// 3. Shape the error `old - new` with [`ErrorShaping::apply`].
/// 4. Store the quantized value; the pixel is never visited again.
/// 5. Add `error * weight / divisor` to each in-bounds kernel target.
///    Targets outside the image are skipped, so edge pixels lose part of
///    their error.
///
/// Planes share the scan but never exchange error.
///
/// Samples are stored as `f32`; every read widens to `f64` and every
/// accumulated value is narrowed back on store.
///
/// # Example
///
/// ```
/// use bilevel_dither::buffer::Plane;
/// use bilevel_dither::dither::{Dither, ErrorDiffusion, ErrorShaping, FLOYD_STEINBERG};
///
/// let mut planes = [Plane::new(2, 1, vec![0.0, 255.0])];
/// ErrorDiffusion::new(&FLOYD_STEINBERG, ErrorShaping::Identity).dither_planes(&mut planes);
/// assert_eq!(planes[0].samples(), &[0.0, 255.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDiffusion {
    kernel: &'static Kernel,
    shaping: ErrorShaping,
}

impl ErrorDiffusion {
    /// Diffusion with `kernel`, shaping each error with `shaping`.
    pub const fn new(kernel: &'static Kernel, shaping: ErrorShaping) -> Self {
        Self { kernel, shaping }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &'static Kernel {
        self.kernel
    }

    /// The shaping strategy in use.
    pub fn shaping(&self) -> ErrorShaping {
        self.shaping
    }
}

impl Dither for ErrorDiffusion {
    fn dither_planes(&self, planes: &mut [Plane]) {
        let Some(first) = planes.first() else {
            return;
        };
        let width = first.width();
        let height = first.height();
        debug_assert!(
            planes
                .iter()
                .all(|p| p.width() == width && p.height() == height),
            "all planes must share dimensions"
        );

        let divisor = self.kernel.divisor as f64;
        let mut errors = vec![0.0f64; planes.len()];

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;

                for (plane, error) in planes.iter_mut().zip(errors.iter_mut()) {
                    let sample = &mut plane.samples_mut()[idx];
                    let old = *sample as f64;
                    let new = if old < BILEVEL_MIDPOINT {
                        0.0
                    } else {
                        BILEVEL_MAX
                    };
                    *error = self.shaping.apply(old - new);
                    *sample = new as f32;
                }

                for &(dx, dy, weight) in self.kernel.entries {
                    let Some(target) = offset_index(x, y, dx, dy, width, height) else {
                        continue;
                    };
                    let factor = weight as f64 / divisor;
                    for (plane, &error) in planes.iter_mut().zip(errors.iter()) {
                        let sample = &mut plane.samples_mut()[target];
                        *sample = (*sample as f64 + error * factor) as f32;
                    }
                }
            }
        }
    }
}

/// Row-major index of `(x + dx, y + dy)`, or `None` if it leaves the image.
#[inline]
fn offset_index(
    x: usize,
    y: usize,
    dx: i32,
    dy: i32,
    width: usize,
    height: usize,
) -> Option<usize> {
    let nx = x.checked_add_signed(dx as isize)?;
    let ny = y.checked_add_signed(dy as isize)?;
    (nx < width && ny < height).then(|| ny * width + nx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::{FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, STUCKI};

    fn run(kernel: &'static Kernel, shaping: ErrorShaping, plane: Plane) -> Plane {
        let mut planes = [plane];
        ErrorDiffusion::new(kernel, shaping).dither_planes(&mut planes);
        let [plane] = planes;
        plane
    }

    #[test]
    fn test_offset_index_bounds() {
        assert_eq!(offset_index(0, 0, -1, 1, 4, 4), None);
        assert_eq!(offset_index(3, 0, 1, 0, 4, 4), None);
        assert_eq!(offset_index(0, 3, 0, 1, 4, 4), None);
        assert_eq!(offset_index(1, 0, -1, 1, 4, 4), Some(4));
        assert_eq!(offset_index(1, 1, 2, 2, 4, 4), Some(15));
    }

    #[test]
    fn test_two_pixel_row() {
        let out = run(
            &FLOYD_STEINBERG,
            ErrorShaping::Identity,
            Plane::new(2, 1, vec![0.0, 255.0]),
        );
        assert_eq!(out.samples(), &[0.0, 255.0]);
    }

    #[test]
    fn test_error_pushed_right() {
        // 100 -> 0 with error 100; 7/16 of it lands on the right neighbor:
        // 100 + 43.75 = 143.75 -> 255
        let out = run(
            &FLOYD_STEINBERG,
            ErrorShaping::Identity,
            Plane::new(2, 1, vec![100.0, 100.0]),
        );
        assert_eq!(out.samples(), &[0.0, 255.0]);
    }

    #[test]
    fn test_error_pushed_down() {
        // single column: only the (0, +1) weight 5/16 applies
        // 100 -> 0, below gets 100 + 31.25 = 131.25 -> 255
        let out = run(
            &FLOYD_STEINBERG,
            ErrorShaping::Identity,
            Plane::new(1, 2, vec![100.0, 100.0]),
        );
        assert_eq!(out.samples(), &[0.0, 255.0]);
    }

    #[test]
    fn test_output_is_bilevel() {
        let samples: Vec<f32> = (0..12 * 9).map(|i| ((i * 37) % 256) as f32).collect();
        for kernel in [&FLOYD_STEINBERG, &STUCKI, &JARVIS_JUDICE_NINKE] {
            for shaping in [ErrorShaping::Identity, ErrorShaping::Rong] {
                let out = run(kernel, shaping, Plane::new(12, 9, samples.clone()));
                assert!(out.samples().iter().all(|&v| v == 0.0 || v == 255.0));
            }
        }
    }

    #[test]
    fn test_mean_preserved_for_flat_gray() {
        let (w, h) = (32, 32);
        let gray = 64.0f32;
        let out = run(
            &JARVIS_JUDICE_NINKE,
            ErrorShaping::Identity,
            Plane::new(w, h, vec![gray; w * h]),
        );
        let white = out.samples().iter().filter(|&&v| v == 255.0).count();
        let ratio = white as f32 / (w * h) as f32;
        assert!(
            (ratio - gray / 255.0).abs() < 0.05,
            "expected ~{} white ratio, got {}",
            gray / 255.0,
            ratio
        );
    }

    #[test]
    fn test_channels_do_not_interact() {
        let r: Vec<f32> = (0..64).map(|i| (i * 4) as f32).collect();
        let g = vec![90.0f32; 64];

        let mut together = [Plane::new(8, 8, r.clone()), Plane::new(8, 8, g.clone())];
        let diffusion = ErrorDiffusion::new(&STUCKI, ErrorShaping::Rong);
        diffusion.dither_planes(&mut together);

        let alone_r = run(&STUCKI, ErrorShaping::Rong, Plane::new(8, 8, r));
        let alone_g = run(&STUCKI, ErrorShaping::Rong, Plane::new(8, 8, g));
        assert_eq!(together[0], alone_r);
        assert_eq!(together[1], alone_g);
    }

    #[test]
    fn test_shaping_changes_result() {
        let samples: Vec<f32> = (0..16 * 16).map(|i| (i % 200) as f32 + 20.0).collect();
        let plain = run(
            &JARVIS_JUDICE_NINKE,
            ErrorShaping::Identity,
            Plane::new(16, 16, samples.clone()),
        );
        let shaped = run(
            &JARVIS_JUDICE_NINKE,
            ErrorShaping::Rong,
            Plane::new(16, 16, samples),
        );
        assert_ne!(plain, shaped);
    }

    #[test]
    fn test_empty_planes() {
        let mut planes: [Plane; 0] = [];
        ErrorDiffusion::new(&FLOYD_STEINBERG, ErrorShaping::Identity).dither_planes(&mut planes);
        let out = run(
            &FLOYD_STEINBERG,
            ErrorShaping::Identity,
            Plane::new(0, 0, Vec::new()),
        );
        assert!(out.samples().is_empty());
    }
}
