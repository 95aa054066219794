//! bilevel-dither: Ordered and error diffusion dithering with fidelity metrics
//!
//! This library turns continuous-tone RGBA pixels into black/white (or
//! per-channel binary) output using classical dithering algorithms, and
//! scores the result against the source with PSNR and SSIM.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use bilevel_dither::{metrics, Ditherer, Method, PixelBuffer};
//!
//! let values: Vec<u8> = (0..32 * 32).map(|i| (i % 32 * 8) as u8).collect();
//! let image = PixelBuffer::from_gray(32, 32, &values).unwrap();
//!
//! let dithered = Ditherer::new(Method::Rong).dither(&image);
//! let quality = metrics::compare(&image, &dithered).unwrap();
//!
//! assert!(dithered.pixels().all(|[r, _, _, _]| r == 0 || r == 255));
//! assert!(quality.psnr < 99.0);
//! ```
//!
//! # Methods
//!
//! Five methods are selectable by name via [`Method`]:
//!
//! | selector | algorithm |
//! |----------|-----------|
//! | `bayer`  | ordered dithering, 4x4 Bayer matrix |
//! | `fs`     | Floyd-Steinberg error diffusion |
//! | `stucki` | Stucki error diffusion |
//! | `jjn`    | Jarvis-Judice-Ninke error diffusion |
//! | `rong`   | JJN with the nonlinear Rong error shaping |
//!
//! # Channel Modes
//!
//! A buffer whose pixels all satisfy `r == g == b` is normally dithered as a
//! single BT.601 luma plane ([`ChannelMode::Grayscale`]). Anything else is
//! dithered as three independent R, G, B planes ([`ChannelMode::Color`]).
//! Channels never share error or threshold decisions, so color output can
//! show fringing where channels switch at different pixels. This is the
//! intended behavior, not a defect to be corrected here.
//!
//! # Numeric Model
//!
//! Working planes hold `f32` samples. Arithmetic on a sample (luma, error,
//! shaping, weighted propagation) is carried out in `f64` and narrowed back
//! to `f32` on every store. Error diffusion is a strictly sequential raster
//! scan; reproducing output bit-for-bit depends on that order.
//!
//! # Metrics
//!
//! - [`metrics::psnr`] returns exactly `99.0` for identical buffers rather
//!   than `+∞`.
//! - [`metrics::ssim`] evaluates only window centers with a full 5-pixel
//!   margin, so both sides must exceed 10 pixels.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod metrics;


pub use api::{dither, dither_selector, ChannelMode, DitherError, Ditherer, Method, Result};
pub use buffer::{PixelBuffer, Plane};
pub use dither::{Algorithm, ErrorShaping, Kernel, KernelKind};
pub use metrics::QualityResult;
