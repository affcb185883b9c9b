use serde::{Deserialize, Serialize};

use crate::domain::generation::{
    ApiKey, GenerationError, Instructions, ProviderAdapter, ProviderId, ProviderRequest,
};
use crate::domain::{Message, MessageRole};

pub(super) const CHAT_TEMPERATURE: f64 = 0.7;

/// OpenAI chat-completions adapter
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    endpoint: String,
}

impl OpenAiAdapter {
    pub fn new() -> Self {
        Self::with_endpoint(ProviderId::OpenAi.info().endpoint)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for OpenAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAdapter for OpenAiAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenAi
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
    }

    fn extract_text(&self, body: &serde_json::Value) -> Result<String, GenerationError> {
        extract_choice_text(body)
    }
}

/// `{model, messages, temperature}` shared by chat-completions style APIs
pub(super) fn chat_completions_body(model: &str, instructions: &Instructions) -> serde_json::Value {
    let messages: Vec<ChatMessage> = instructions
        .messages()
        .iter()
        .map(ChatMessage::from_domain)
        .collect();

    serde_json::json!({
        "model": model,
        "messages": messages,
        "temperature": CHAT_TEMPERATURE,
    })
}

/// Text of `choices[0].message.content`
pub(super) fn extract_choice_text(body: &serde_json::Value) -> Result<String, GenerationError> {
    let response = ChatCompletionResponse::deserialize(body)
        .map_err(|e| GenerationError::malformed(format!("unexpected response shape: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::malformed("no choices in response"))?;

    choice
        .message
        .content
        .ok_or_else(|| GenerationError::malformed("response message has no content"))
}

// Chat-completions API types

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
        };

        Self {
            role,
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
