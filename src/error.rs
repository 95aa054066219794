use bilevel_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {color_type:?} at {bit_depth:?}")]
    UnsupportedPng {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("bad key".to_string());
        assert_eq!(error.to_string(), "Config error: bad key");
    }

    #[test]
    fn test_app_error_unsupported_png() {
        let error = AppError::UnsupportedPng {
            color_type: png::ColorType::Indexed,
            bit_depth: png::BitDepth::Four,
        };
        assert_eq!(
            error.to_string(),
            "Unsupported PNG layout: Indexed at Four"
        );
    }

    #[test]
    fn test_app_error_from_dither_error() {
        let app_error: AppError = DitherError::UnknownMethod("x".to_string()).into();
        match app_error {
            AppError::Dither(DitherError::UnknownMethod(name)) => assert_eq!(name, "x"),
            other => panic!("Expected Dither variant, got {other:?}"),
        }
    }

    #[test]
    fn test_app_error_dither_message() {
        let app_error: AppError = DitherError::DegenerateRegion {
            width: 4,
            height: 4,
        }
        .into();
        assert_eq!(
            app_error.to_string(),
            "Dither error: Image too small for SSIM: 4x4 (both sides must exceed 10px)"
        );
    }
}
