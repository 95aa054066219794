use bilevel_dither::{ChannelMode, Method};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DITHERLAB_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Method selector used when `--method` is not given
    #[serde(default = "default_method")]
    pub default_method: String,

    /// Channel path used when `--mode` is not given
    #[serde(default)]
    pub channel_mode: ChannelModeSetting,

    /// Name outputs `<stem>_<method>.png` next to the input
    #[serde(default = "default_output_suffix")]
    pub output_suffix: bool,
}

fn default_method() -> String {
    Method::Rong.selector().to_string()
}

fn default_output_suffix() -> bool {
    true
}

/// How the channel path is chosen.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChannelModeSetting {
    /// Grayscale if every pixel has r == g == b, otherwise per-channel
    #[default]
    Auto,
    /// Always dither the luma plane
    Grayscale,
    /// Always dither R, G and B independently
    Color,
}

impl ChannelModeSetting {
    /// The forced mode, or `None` to detect per image.
    pub fn forced(self) -> Option<ChannelMode> {
        match self {
            ChannelModeSetting::Auto => None,
            ChannelModeSetting::Grayscale => Some(ChannelMode::Grayscale),
            ChannelModeSetting::Color => Some(ChannelMode::Color),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        // Validate the selector up front so a typo fails at load time
        config.method()?;
        Ok(config)
    }

    /// Load configuration from `path`, or from `$DITHERLAB_CONFIG`, falling
    /// back to defaults when neither is set or the file is unusable.
    pub fn load(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV).map(std::path::PathBuf::from);
        let Some(path) = path.or(env_path.as_deref()) else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        method = %config.default_method,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured default method.
    pub fn method(&self) -> Result<Method, AppError> {
        Ok(self.default_method.parse::<Method>()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            channel_mode: ChannelModeSetting::default(),
            output_suffix: default_output_suffix(),
        }
    }
}
