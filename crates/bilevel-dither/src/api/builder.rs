//! Ditherer builder -- the primary entry point for the crate.
//!
//! [`Ditherer`] pairs a [`Method`] with an optional forced [`ChannelMode`]
//! and turns packed buffers into new, dithered packed buffers.

use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::color::{luma_plane, rgb_planes};
use crate::dither::Dither;

use super::{ChannelMode, Method, Result};

/// High-level dithering builder.
///
/// # Design
///
/// - Constructor requires a [`Method`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder can process
///   many buffers
/// - Without an explicit channel mode the path is chosen per buffer with
///   [`ChannelMode::detect`]
///
/// # Example
///
/// ```
/// use bilevel_dither::{ChannelMode, Ditherer, Method, PixelBuffer};
///
/// let ditherer = Ditherer::new(Method::FloydSteinberg).channel_mode(ChannelMode::Grayscale);
/// let input = PixelBuffer::from_gray(2, 1, &[0, 255]).unwrap();
/// let output = ditherer.dither(&input);
///
/// assert_eq!(output.as_bytes(), &[0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ditherer {
    method: Method,
    channel_mode: Option<ChannelMode>,
}

impl Ditherer {
    /// Create a ditherer for `method` that auto-detects the channel mode.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            channel_mode: None,
        }
    }

    /// Create a ditherer from a selector string such as `"jjn"`.
    ///
    /// Returns [`DitherError::UnknownMethod`](super::DitherError::UnknownMethod)
    /// for anything outside `bayer`, `fs`, `stucki`, `jjn`, `rong`.
    pub fn from_selector(selector: &str) -> Result<Self> {
        Ok(Self::new(selector.parse()?))
    }

    /// Force the grayscale or color path instead of detecting it.
    #[inline]
    pub fn channel_mode(mut self, mode: ChannelMode) -> Self {
        self.channel_mode = Some(mode);
        self
    }

    /// The configured method.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The channel mode that [`dither()`](Self::dither) would use for `buffer`.
    pub fn resolve_mode(&self, buffer: &PixelBuffer) -> ChannelMode {
        self.channel_mode
            .unwrap_or_else(|| ChannelMode::detect(buffer))
    }

    /// Dither `buffer` into a new buffer of the same size.
    ///
    /// The input is only read. Output samples are `0` or `255` per
    /// processed channel and alpha is `255`.
    pub fn dither(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let mode = self.resolve_mode(buffer);
        let algorithm = self.method.algorithm();
        let start = Instant::now();

        let output = match mode {
            ChannelMode::Grayscale => {
                let mut planes = [luma_plane(buffer)];
                algorithm.dither_planes(&mut planes);
                PixelBuffer::from_luma_plane(&planes[0])
            }
            ChannelMode::Color => {
                let mut planes = rgb_planes(buffer);
                algorithm.dither_planes(&mut planes);
                PixelBuffer::from_rgb_planes(&planes)
            }
        };

        tracing::debug!(
            method = %self.method,
            ?mode,
            width = buffer.width(),
            height = buffer.height(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Dithered buffer"
        );
        output
    }
}

/// Dither `buffer` with `method` along an explicitly chosen channel path.
pub fn dither(buffer: &PixelBuffer, method: Method, mode: ChannelMode) -> PixelBuffer {
    Ditherer::new(method).channel_mode(mode).dither(buffer)
}

/// Dither `buffer` with the method named by `selector`.
///
/// Fails with [`DitherError::UnknownMethod`](super::DitherError::UnknownMethod)
/// before touching the buffer if the selector is not recognised.
pub fn dither_selector(
    buffer: &PixelBuffer,
    selector: &str,
    mode: ChannelMode,
) -> Result<PixelBuffer> {
    Ok(Ditherer::from_selector(selector)?
        .channel_mode(mode)
        .dither(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DitherError;

    #[test]
    fn test_new_auto_detects() {
        let ditherer = Ditherer::new(Method::Bayer);
        let gray = PixelBuffer::filled(4, 4, [99, 99, 99, 255]);
        let color = PixelBuffer::filled(4, 4, [99, 10, 99, 255]);
        assert_eq!(ditherer.resolve_mode(&gray), ChannelMode::Grayscale);
        assert_eq!(ditherer.resolve_mode(&color), ChannelMode::Color);
    }

    #[test]
    fn test_forced_mode_wins() {
        let ditherer = Ditherer::new(Method::Bayer).channel_mode(ChannelMode::Color);
        let gray = PixelBuffer::filled(4, 4, [99, 99, 99, 255]);
        assert_eq!(ditherer.resolve_mode(&gray), ChannelMode::Color);
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(
            Ditherer::from_selector("stucki").unwrap().method(),
            Method::Stucki
        );
        assert_eq!(
            Ditherer::from_selector("sierra").unwrap_err(),
            DitherError::UnknownMethod("sierra".to_string())
        );
    }

    #[test]
    fn test_dither_preserves_shape_and_input() {
        let input = PixelBuffer::filled(9, 5, [130, 20, 240, 7]);
        let snapshot = input.clone();
        for method in Method::ALL {
            let output = Ditherer::new(method).dither(&input);
            assert_eq!(output.dimensions(), (9, 5));
            assert!(output.pixels().all(|px| px[3] == 255));
        }
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_grayscale_path_outputs_gray() {
        let input = PixelBuffer::filled(6, 6, [30, 200, 90, 255]);
        let output = dither(&input, Method::JarvisJudiceNinke, ChannelMode::Grayscale);
        assert!(output.pixels().all(|[r, g, b, _]| r == g && g == b));
    }

    #[test]
    fn test_dither_selector_unknown() {
        let input = PixelBuffer::filled(2, 2, [0; 4]);
        assert!(matches!(
            dither_selector(&input, "random", ChannelMode::Color),
            Err(DitherError::UnknownMethod(_))
        ));
    }
}
