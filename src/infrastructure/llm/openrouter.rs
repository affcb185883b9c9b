use super::openai::{chat_completions_body, extract_choice_text};
use crate::domain::generation::{
    ApiKey, GenerationError, Instructions, ProviderAdapter, ProviderId, ProviderRequest,
};

pub const DEFAULT_APP_TITLE: &str = "CLO Generator";
pub const DEFAULT_REFERER: &str = "http://localhost";

/// OpenRouter aggregator adapter. Same wire format as OpenAI plus the two
/// app identification headers.
#[derive(Debug, Clone)]
pub struct OpenRouterAdapter {
    endpoint: String,
    referer: String,
    title: String,
}

impl OpenRouterAdapter {
    pub fn new(referer: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_endpoint(ProviderId::OpenRouter.info().endpoint, referer, title)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        referer: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            referer: referer.into(),
            title: title.into(),
        }
    }
}

impl Default for OpenRouterAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_REFERER, DEFAULT_APP_TITLE)
    }
}

impl ProviderAdapter for OpenRouterAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenRouter
    }

    fn build_request(
        &self,
        model: &str,
        api_key: &ApiKey,
        instructions: &Instructions,
    ) -> ProviderRequest {
        ProviderRequest::new(&self.endpoint, chat_completions_body(model, instructions))
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", format!("Bearer {}", api_key.expose()))
            .with_header("HTTP-Referer", &self.referer)
            .with_header("X-Title", &self.title)
    }

    fn extract_text(&self, body: &serde_json::Value) -> Result<String, GenerationError> {
        extract_choice_text(body)
    }
}
