use serde::{Deserialize, Serialize};

use crate::domain::generation::{
    ApiKey, GenerationError, Instructions, ProviderAdapter, ProviderId, ProviderRequest,
};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// Anthropic messages API adapter
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    endpoint: String,
}

impl AnthropicAdapter {
    pub fn new() -> Self {
        Self::with_endpoint(ProviderId::Anthropic.info().endpoint)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for AnthropicAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn build_request(
        &self,
        model: &str,
        api_key: &ApiKey,
        instructions: &Instructions,
    ) -> ProviderRequest {
        // The system prompt travels outside the message list
        let body = serde_json::json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "system": instructions.system,
            "messages": [AnthropicMessage {
                role: "user",
                content: &instructions.user,
            }],
        });

        ProviderRequest::new(&self.endpoint, body)
            .with_header("Content-Type", "application/json")
            .with_header("x-api-key", api_key.expose())
            .with_header("anthropic-version", ANTHROPIC_VERSION)
    }

    fn extract_text(&self, body: &serde_json::Value) -> Result<String, GenerationError> {
        let response = AnthropicResponse::deserialize(body)
            .map_err(|e| GenerationError::malformed(format!("unexpected response shape: {}", e)))?;

        let texts: Vec<String> = response
            .content
            .into_iter()
            .filter_map(|block| {
                if block.content_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect();

        if texts.is_empty() {
            return Err(GenerationError::malformed("no text content in response"));
        }

        Ok(texts.join(""))
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions() -> Instructions {
        Instructions {
            system: "You are an expert curriculum designer".to_string(),
            user: "Generate 3 Course Learning Outcomes".to_string(),
        }
    }

    #[test]
    fn test_build_request() {
        let adapter = AnthropicAdapter::new();
        let request = adapter.build_request(
            "claude-3-5-haiku-20241022",
            &ApiKey::new("sk-ant-test"),
            &instructions(),
        );

        assert_eq!(request.url, "https://api.anthropic.com/v1/messages");
        assert_eq!(request.header("x-api-key"), Some("sk-ant-test"));
        assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(
            request.body,
            serde_json::json!({
                "model": "claude-3-5-haiku-20241022",
                "max_tokens": 2048,
                "system": "You are an expert curriculum designer",
                "messages": [{"role": "user", "content": "Generate 3 Course Learning Outcomes"}]
            })
        );
    }

    #[test]
    fn test_extract_text() {
        let body = serde_json::json!({
            "id": "msg_123",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": [{"type": "text", "text": "[]"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 2}
        });

        assert_eq!(AnthropicAdapter::new().extract_text(&body).unwrap(), "[]");
    }

    #[test]
    fn test_extract_text_without_text_blocks() {
        let adapter = AnthropicAdapter::new();
        let body = serde_json::json!({"content": [{"type": "tool_use", "id": "t1"}]});

        assert!(adapter.extract_text(&body).is_err());
        assert!(adapter.extract_text(&serde_json::json!({"choices": []})).is_err());
    }

    #[test]
    fn test_extract_error() {
        let body = serde_json::json!({
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        });
        assert_eq!(
            AnthropicAdapter::new().extract_error(&body),
            Some("invalid x-api-key".to_string())
        );
    }
}
