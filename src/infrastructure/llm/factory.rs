use std::sync::Arc;

use super::{AnthropicAdapter, OpenAiAdapter, OpenRouterAdapter};
use crate::config::ClientConfig;
use crate::domain::generation::{ProviderAdapter, ProviderId};

/// Factory for provider adapters
#[derive(Debug)]
pub struct ProviderAdapterFactory;

impl ProviderAdapterFactory {
    /// Create the adapter for a provider
    pub fn create(provider: ProviderId, config: &ClientConfig) -> Arc<dyn ProviderAdapter> {
        match provider {
            ProviderId::OpenAi => Arc::new(OpenAiAdapter::new()),
            ProviderId::Anthropic => Arc::new(AnthropicAdapter::new()),
            ProviderId::OpenRouter => Arc::new(OpenRouterAdapter::new(
                config.origin.as_str(),
                config.app_title.as_str(),
            )),
        }
    }
}
