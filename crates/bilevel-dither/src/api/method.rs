//! Method selectors and their resolved configurations.

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::color::is_grayscale;
use crate::dither::{Algorithm, ErrorShaping, KernelKind};

use super::DitherError;

/// A dithering method, as chosen by a selector string.
///
/// | selector | algorithm |
/// |---|---|
/// | `bayer` | ordered, 4x4 Bayer |
/// | `fs` | diffusion, Floyd-Steinberg |
/// | `stucki` | diffusion, Stucki |
/// | `jjn` | diffusion, Jarvis-Judice-Ninke |
/// | `rong` | diffusion, Jarvis-Judice-Ninke with Rong error shaping |
///
/// # Example
///
/// ```
/// use bilevel_dither::Method;
///
/// let method: Method = "rong".parse().unwrap();
/// assert_eq!(method, Method::Rong);
/// assert_eq!(method.to_string(), "rong");
/// assert_eq!(method.display_name(), "Rong");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bayer,
    FloydSteinberg,
    Stucki,
    JarvisJudiceNinke,
    Rong,
}

impl Method {
    /// Every method, in menu order.
    pub const ALL: [Method; 5] = [
        Method::Bayer,
        Method::FloydSteinberg,
        Method::Stucki,
        Method::JarvisJudiceNinke,
        Method::Rong,
    ];

    /// The selector string accepted by [`FromStr`].
    pub fn selector(self) -> &'static str {
        match self {
            Method::Bayer => "bayer",
            Method::FloydSteinberg => "fs",
            Method::Stucki => "stucki",
            Method::JarvisJudiceNinke => "jjn",
            Method::Rong => "rong",
        }
    }

    /// Human readable name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Method::Bayer => "Bayer",
            Method::FloydSteinberg => "Floyd–Steinberg",
            Method::Stucki => "Stucki",
            Method::JarvisJudiceNinke => "JJN",
            Method::Rong => "Rong",
        }
    }

    /// Resolve to an algorithm configuration.
    ///
    /// The same configuration serves both the grayscale and the color path;
    /// only the number of planes differs.
    pub fn algorithm(self) -> Algorithm {
        match self {
            Method::Bayer => Algorithm::bayer(),
            Method::FloydSteinberg => {
                Algorithm::diffusion(KernelKind::FloydSteinberg, ErrorShaping::Identity)
            }
            Method::Stucki => Algorithm::diffusion(KernelKind::Stucki, ErrorShaping::Identity),
            Method::JarvisJudiceNinke => {
                Algorithm::diffusion(KernelKind::JarvisJudiceNinke, ErrorShaping::Identity)
            }
            Method::Rong => Algorithm::diffusion(KernelKind::JarvisJudiceNinke, ErrorShaping::Rong),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Method {
    type Err = DitherError;

    /// Selectors are matched exactly (lowercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.selector() == s)
            .ok_or_else(|| DitherError::UnknownMethod(s.to_string()))
    }
}

/// Which planes a buffer is dithered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// One luma plane; output has `R = G = B`.
    Grayscale,
    /// Independent red, green and blue planes.
    Color,
}

impl ChannelMode {
    /// [`Grayscale`](Self::Grayscale) if every pixel has `r == g == b`,
    /// otherwise [`Color`](Self::Color).
    pub fn detect(buffer: &PixelBuffer) -> Self {
        if is_grayscale(buffer) {
            ChannelMode::Grayscale
        } else {
            ChannelMode::Color
        }
    }

    /// Label used in image summaries.
    pub fn label(self) -> &'static str {
        match self {
            ChannelMode::Grayscale => "Grayscale",
            ChannelMode::Color => "RGB",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::{JARVIS_JUDICE_NINKE, STUCKI};

    #[test]
    fn test_selector_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.selector().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_selector() {
        for bad in ["", "atkinson", "FS", " jjn"] {
            assert_eq!(
                bad.parse::<Method>().unwrap_err(),
                DitherError::UnknownMethod(bad.to_string())
            );
        }
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = Method::ALL.iter().map(|m| m.display_name()).collect();
        assert_eq!(
            names,
            ["Bayer", "Floyd–Steinberg", "Stucki", "JJN", "Rong"]
        );
    }

    #[test]
    fn test_dispatch_table() {
        assert_eq!(Method::Bayer.algorithm(), Algorithm::bayer());
        match Method::Stucki.algorithm() {
            Algorithm::Diffusion(d) => {
                assert_eq!(d.kernel(), &STUCKI);
                assert_eq!(d.shaping(), ErrorShaping::Identity);
            }
            other => panic!("unexpected {other:?}"),
        }
        match Method::Rong.algorithm() {
            Algorithm::Diffusion(d) => {
                assert_eq!(d.kernel(), &JARVIS_JUDICE_NINKE);
                assert_eq!(d.shaping(), ErrorShaping::Rong);
            }
            other => panic!("unexpected {other:?}"),
        }
        match Method::JarvisJudiceNinke.algorithm() {
            Algorithm::Diffusion(d) => assert_eq!(d.shaping(), ErrorShaping::Identity),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_detect_channel_mode() {
        let gray = PixelBuffer::filled(2, 2, [5, 5, 5, 255]);
        let color = PixelBuffer::filled(2, 2, [5, 6, 5, 255]);
        assert_eq!(ChannelMode::detect(&gray), ChannelMode::Grayscale);
        assert_eq!(ChannelMode::detect(&color), ChannelMode::Color);
        assert_eq!(ChannelMode::Color.label(), "RGB");
    }
}
