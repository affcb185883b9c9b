use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_APP_TITLE, DEFAULT_REFERER};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub client: ClientConfig,
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// How this client identifies itself to aggregators
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub origin: String,
    pub app_title: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// How long the "Copied!" indicator stays visible
    pub copied_reset_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_REFERER.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            copied_reset_ms: 2000,
        }
    }
}

impl FeedbackConfig {
    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("CLO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
