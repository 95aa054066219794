use bilevel_dither::{ChannelMode, Method, PixelBuffer};
use serde::Serialize;
use std::fmt;

/// Summary of one dither run, as printed after processing an image.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DitherReport {
    /// Method selector (e.g. "jjn")
    pub method: &'static str,
    /// Human readable method name (e.g. "JJN")
    pub method_name: &'static str,
    /// "Grayscale" or "RGB"
    pub channel_mode: &'static str,
    pub width: u32,
    pub height: u32,
    /// Wall-clock time spent dithering, excluding metrics and I/O
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub quality: QualityReport,
}

impl DitherReport {
    pub fn new(
        method: Method,
        mode: ChannelMode,
        buffer: &PixelBuffer,
        elapsed_ms: f64,
        quality: QualityReport,
    ) -> Self {
        Self {
            method: method.selector(),
            method_name: method.display_name(),
            channel_mode: mode.label(),
            width: buffer.width(),
            height: buffer.height(),
            elapsed_ms,
            quality,
        }
    }
}

impl fmt::Display for DitherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} • {:.1} ms • {}",
            self.method_name, self.elapsed_ms, self.quality
        )
    }
}

/// PSNR and, when the image is large enough, SSIM.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct QualityReport {
    pub psnr: f64,
    /// `None` when either side is 10 pixels or less
    pub ssim: Option<f64>,
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PSNR={:.2} • ", self.psnr)?;
        match self.ssim {
            Some(ssim) => write!(f, "SSIM={:.3}", ssim),
            None => write!(f, "SSIM=n/a"),
        }
    }
}

/// One-line description of an input image: `"640 × 480px • RGB"`.
pub fn describe_buffer(buffer: &PixelBuffer) -> String {
    format!(
        "{} × {}px • {}",
        buffer.width(),
        buffer.height(),
        ChannelMode::detect(buffer).label()
    )
}
