pub mod config;
pub mod report;

pub use config::{AppConfig, ChannelModeSetting};
pub use report::{describe_buffer, DitherReport, QualityReport};
