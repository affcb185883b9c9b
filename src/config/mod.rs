mod app_config;

pub use app_config::{AppConfig, ClientConfig, FeedbackConfig, LogFormat, LoggingConfig};
