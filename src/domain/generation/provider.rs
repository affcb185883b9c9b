use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Identifier of a supported text-generation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[default]
    OpenAi,
    Anthropic,
    OpenRouter,
}

/// Static description of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: ProviderId,
    pub name: &'static str,
    /// Selectable models; the first one is the default
    pub models: &'static [&'static str],
    pub endpoint: &'static str,
}

impl ProviderInfo {
    pub fn default_model(&self) -> &'static str {
        self.models[0]
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.models.contains(&model)
    }
}

pub const PROVIDERS: [ProviderInfo; 3] = [
    ProviderInfo {
        id: ProviderId::OpenAi,
        name: "OpenAI",
        models: &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo"],
        endpoint: "https://api.openai.com/v1/chat/completions",
    },
    ProviderInfo {
        id: ProviderId::Anthropic,
        name: "Anthropic",
        models: &["claude-sonnet-4-20250514", "claude-3-5-haiku-20241022"],
        endpoint: "https://api.anthropic.com/v1/messages",
    },
    ProviderInfo {
        id: ProviderId::OpenRouter,
        name: "OpenRouter",
        models: &["openai/gpt-4o", "anthropic/claude-sonnet-4", "google/gemini-pro"],
        endpoint: "https://openrouter.ai/api/v1/chat/completions",
    },
];

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::OpenAi, ProviderId::Anthropic, ProviderId::OpenRouter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::OpenRouter => "openrouter",
        }
    }

    pub fn info(&self) -> &'static ProviderInfo {
        match self {
            Self::OpenAi => &PROVIDERS[0],
            Self::Anthropic => &PROVIDERS[1],
            Self::OpenRouter => &PROVIDERS[2],
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    pub fn default_model(&self) -> &'static str {
        self.info().default_model()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "openrouter" => Ok(Self::OpenRouter),
            other => Err(DomainError::not_found(format!("Provider '{}' not found", other))),
        }
    }
}
