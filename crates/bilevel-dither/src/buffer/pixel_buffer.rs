//! Packed RGBA pixel buffer.

use crate::api::{DitherError, Result};

/// Bytes per packed pixel (R, G, B, A).
pub(crate) const CHANNELS: usize = 4;

/// A packed 8-bit RGBA image.
///
/// Samples are interleaved `[R, G, B, A, R, G, B, A, ...]` in row-major order
/// with the origin at the top-left corner. The core never reads alpha, and
/// every buffer it produces has alpha forced to 255.
///
/// # Example
///
/// ```
/// use bilevel_dither::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
/// assert_eq!(buffer.pixel(1, 0), [255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// Returns [`DitherError::InvalidBufferLength`] unless
    /// `data.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(DitherError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(count),
        }
    }

    /// Create an opaque gray buffer from one 8-bit value per pixel.
    ///
    /// Returns [`DitherError::InvalidBufferLength`] unless
    /// `values.len() == width * height`.
    pub fn from_gray(width: u32, height: u32, values: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(DitherError::InvalidBufferLength {
                expected: expected * CHANNELS,
                actual: values.len() * CHANNELS,
            });
        }
        let data = values.iter().flat_map(|&v| [v, v, v, 255]).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer with trusted dimensions; used by the crate's own
    /// output paths, which always size `data` from the source buffer.
    pub(crate) fn from_raw_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * CHANNELS,
            "data length must match {}x{} RGBA",
            width,
            height,
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The packed RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the packed RGBA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Iterate over pixels as `[R, G, B, A]` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}
