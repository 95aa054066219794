use bilevel_dither::{metrics, ChannelMode, DitherError, Ditherer, Method, PixelBuffer};
use std::time::Instant;

use crate::error::AppError;
use crate::models::{AppConfig, DitherReport, QualityReport};

/// Result of dithering one image: the new buffer plus its report.
#[derive(Debug, Clone)]
pub struct DitherOutcome {
    pub output: PixelBuffer,
    pub report: DitherReport,
}

/// Runs dither jobs with configured defaults and scores the results.
#[derive(Debug, Clone, Default)]
pub struct DitherService {
    config: AppConfig,
}

impl DitherService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pick the method: explicit selector first, then the configured default.
    pub fn resolve_method(&self, selector: Option<&str>) -> Result<Method, AppError> {
        match selector {
            Some(selector) => Ok(selector.parse::<Method>()?),
            None => self.config.method(),
        }
    }

    /// Dither `input` and score the output against it.
    ///
    /// `mode` overrides the configured channel mode; `None` on both means
    /// detect from the image.
    pub fn dither(
        &self,
        input: &PixelBuffer,
        method: Method,
        mode: Option<ChannelMode>,
    ) -> Result<DitherOutcome, AppError> {
        let mut ditherer = Ditherer::new(method);
        if let Some(mode) = mode.or(self.config.channel_mode.forced()) {
            ditherer = ditherer.channel_mode(mode);
        }
        let resolved = ditherer.resolve_mode(input);

        let start = Instant::now();
        let output = ditherer.dither(input);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let quality = score(input, &output)?;
        let report = DitherReport::new(method, resolved, input, elapsed_ms, quality);
        tracing::info!(
            method = report.method,
            mode = report.channel_mode,
            elapsed_ms,
            psnr = quality.psnr,
            ssim = ?quality.ssim,
            "Dithered image"
        );
        Ok(DitherOutcome { output, report })
    }
}

/// Compute PSNR and, if the image allows it, SSIM.
///
/// Undersized images still get a PSNR; their SSIM is reported as `None`
/// instead of failing the whole comparison.
pub fn score(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<QualityReport, AppError> {
    let psnr = metrics::psnr(reference, candidate)?;
    let ssim = match metrics::ssim(reference, candidate) {
        Ok(ssim) => Some(ssim),
        Err(DitherError::DegenerateRegion { width, height }) => {
            tracing::warn!(width, height, "Image too small for SSIM, skipping");
            None
        }
        Err(e) => return Err(e.into()),
    };
    Ok(QualityReport { psnr, ssim })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelModeSetting;

    fn ramp(width: u32, height: u32) -> PixelBuffer {
        let values: Vec<u8> = (0..width * height)
            .map(|i| ((i % width) * 255 / (width - 1)) as u8)
            .collect();
        PixelBuffer::from_gray(width, height, &values).unwrap()
    }

    #[test]
    fn test_resolve_method_explicit() {
        let service = DitherService::default();
        assert_eq!(service.resolve_method(Some("jjn")).unwrap(), Method::JarvisJudiceNinke);
    }

    #[test]
    fn test_resolve_method_default() {
        let service = DitherService::default();
        assert_eq!(service.resolve_method(None).unwrap(), Method::Rong);
    }

    #[test]
    fn test_resolve_method_unknown() {
        let service = DitherService::default();
        assert!(matches!(
            service.resolve_method(Some("ordered")),
            Err(AppError::Dither(DitherError::UnknownMethod(_)))
        ));
    }

    #[test]
    fn test_dither_reports_metrics() {
        let service = DitherService::default();
        let input = ramp(32, 16);
        let outcome = service.dither(&input, Method::Bayer, None).unwrap();
        assert_eq!(outcome.output.dimensions(), (32, 16));
        assert_eq!(outcome.report.method, "bayer");
        assert_eq!(outcome.report.channel_mode, "Grayscale");
        assert!(outcome.report.quality.psnr < 99.0);
        assert!(outcome.report.quality.ssim.is_some());
    }

    #[test]
    fn test_config_forces_color() {
        let config = AppConfig {
            channel_mode: ChannelModeSetting::Color,
            ..AppConfig::default()
        };
        let service = DitherService::new(config);
        let outcome = service.dither(&ramp(12, 12), Method::Stucki, None).unwrap();
        assert_eq!(outcome.report.channel_mode, "RGB");
    }

    #[test]
    fn test_explicit_mode_beats_config() {
        let config = AppConfig {
            channel_mode: ChannelModeSetting::Color,
            ..AppConfig::default()
        };
        let service = DitherService::new(config);
        let outcome = service
            .dither(&ramp(12, 12), Method::Stucki, Some(ChannelMode::Grayscale))
            .unwrap();
        assert_eq!(outcome.report.channel_mode, "Grayscale");
    }

    #[test]
    fn test_small_image_skips_ssim() {
        let service = DitherService::default();
        let outcome = service.dither(&ramp(8, 8), Method::FloydSteinberg, None).unwrap();
        assert_eq!(outcome.report.quality.ssim, None);
    }

    #[test]
    fn test_score_mismatch_is_error() {
        let a = ramp(12, 12);
        let b = ramp(13, 12);
        assert!(matches!(
            score(&a, &b),
            Err(AppError::Dither(DitherError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_score_identical() {
        let a = ramp(12, 12);
        let quality = score(&a, &a).unwrap();
        assert_eq!(quality.psnr, 99.0);
        assert!((quality.ssim.unwrap() - 1.0).abs() < 1e-6);
    }
}
