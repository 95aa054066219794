//! ditherlab - bilevel dithering workbench
//!
//! Decodes PNG files into pixel buffers, runs them through `bilevel-dither`,
//! encodes the results and reports PSNR/SSIM.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
