//! Color conversion between packed buffers and working planes.
//!
//! Luma uses the fixed BT.601 weighting; there is no other color model.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::color::{is_grayscale, rgb_to_luma};
//! use bilevel_dither::PixelBuffer;
//!
//! assert!((rgb_to_luma(255.0, 255.0, 255.0) - 255.0).abs() < 1e-9);
//!
//! let gray = PixelBuffer::from_gray(2, 1, &[10, 20]).unwrap();
//! assert!(is_grayscale(&gray));
//! ```

mod convert;
mod luma;

pub use convert::{luma_plane, quantize_sample, rgb_planes};
pub use luma::{is_grayscale, pixel_luma, rgb_to_luma};
