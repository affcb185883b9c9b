use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::http_client::HttpClientTrait;
use super::ProviderAdapterFactory;
use crate::config::ClientConfig;
use crate::domain::generation::{
    parse_outcomes, GeneratedOutcome, GenerationError, GenerationRequest, OutcomeService,
    ProviderAdapter, ProviderId,
};
use crate::domain::DomainError;

/// Dispatches generation requests to the selected provider over HTTP
#[derive(Debug)]
pub struct OutcomeGenerator<C: HttpClientTrait> {
    client: C,
    openai: Arc<dyn ProviderAdapter>,
    anthropic: Arc<dyn ProviderAdapter>,
    openrouter: Arc<dyn ProviderAdapter>,
}

impl<C: HttpClientTrait> OutcomeGenerator<C> {
    pub fn new(client: C, config: &ClientConfig) -> Self {
        Self {
            client,
            openai: ProviderAdapterFactory::create(ProviderId::OpenAi, config),
            anthropic: ProviderAdapterFactory::create(ProviderId::Anthropic, config),
            openrouter: ProviderAdapterFactory::create(ProviderId::OpenRouter, config),
        }
    }

    /// Replace the adapter registered for `adapter.provider_id()`
    pub fn with_adapter(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        match adapter.provider_id() {
            ProviderId::OpenAi => self.openai = adapter,
            ProviderId::Anthropic => self.anthropic = adapter,
            ProviderId::OpenRouter => self.openrouter = adapter,
        }
        self
    }

    pub fn adapter(&self, provider: ProviderId) -> &dyn ProviderAdapter {
        match provider {
            ProviderId::OpenAi => self.openai.as_ref(),
            ProviderId::Anthropic => self.anthropic.as_ref(),
            ProviderId::OpenRouter => self.openrouter.as_ref(),
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> OutcomeService for OutcomeGenerator<C> {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedOutcome>, GenerationError> {
        let provider = request.provider;
        let adapter = self.adapter(provider);
        let outbound = adapter.build_request(&request.model, &request.api_key, &request.instructions());

        info!(
            request_id = request.id,
            provider = %provider,
            model = %request.model,
            "Dispatching generation request"
        );

        let response = self
            .client
            .post_json(&outbound.url, &outbound.headers, &outbound.body)
            .await
            .map_err(|e| {
                let message = match e {
                    DomainError::Transport { message } => message,
                    other => other.to_string(),
                };
                warn!(provider = %provider, error = %message, "Provider unreachable");
                GenerationError::transport(provider.display_name(), message)
            })?;

        if !response.is_success() {
            let error = GenerationError::from_status(response.status, adapter.extract_error(&response.body));
            warn!(provider = %provider, status = response.status, error = %error, "Provider returned an error");
            return Err(error);
        }

        let text = adapter.extract_text(&response.body)?;
        let outcomes = parse_outcomes(&text)?;

        let level = request.course.level;
        for outcome in outcomes.iter().filter(|o| !level.allows_verb(&o.verb)) {
            warn!(
                request_id = request.id,
                verb = %outcome.verb,
                level = %level,
                "Outcome verb is outside the course level"
            );
        }

        info!(
            request_id = request.id,
            provider = %provider,
            count = outcomes.len(),
            "Generated outcomes"
        );

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::CourseLevel;
    use crate::domain::generation::{ApiKey, CourseDetails};
    use crate::domain::widget::GeneratorWidget;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
    const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
    const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

    fn url_for(provider: ProviderId) -> &'static str {
        match provider {
            ProviderId::OpenAi => OPENAI_URL,
            ProviderId::Anthropic => ANTHROPIC_URL,
            ProviderId::OpenRouter => OPENROUTER_URL,
        }
    }

    fn sample_outcomes() -> Vec<GeneratedOutcome> {
        vec![
            GeneratedOutcome {
                text: "Identify visually communicated elements of observational drawing".to_string(),
                plos: vec![1],
                bloom_level: "Remember".to_string(),
                verb: "Identify".to_string(),
            },
            GeneratedOutcome {
                text: "Demonstrate foundational drawing techniques for sketching and ideation".to_string(),
                plos: vec![2, 4],
                bloom_level: "Apply".to_string(),
                verb: "Demonstrate".to_string(),
            },
        ]
    }

    /// Wrap generated text in the provider's success envelope
    fn success_body(provider: ProviderId, text: &str) -> serde_json::Value {
        match provider {
            ProviderId::Anthropic => serde_json::json!({
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": text}],
                "stop_reason": "end_turn"
            }),
            ProviderId::OpenAi | ProviderId::OpenRouter => serde_json::json!({
                "id": "chatcmpl-01",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": text},
                    "finish_reason": "stop"
                }]
            }),
        }
    }

    fn request(provider: ProviderId) -> GenerationRequest {
        GenerationRequest {
            id: 7,
            provider,
            model: provider.default_model().to_string(),
            api_key: ApiKey::new("sk-test"),
            course: CourseDetails {
                code: "DESN 100".to_string(),
                name: "Drawing for Communication".to_string(),
                description: String::new(),
                level: CourseLevel::Foundational,
            },
            plos: vec![1, 2, 4, 5],
            outcome_count: 4,
        }
    }

    #[tokio::test]
    async fn test_round_trip_for_every_provider() {
        let expected = sample_outcomes();
        let text = serde_json::to_string(&expected).unwrap();

        for provider in ProviderId::ALL {
            let client = MockHttpClient::new()
                .with_response(url_for(provider), success_body(provider, &text));
            let generator = OutcomeGenerator::new(client, &ClientConfig::default());

            let outcomes = generator.generate(&request(provider)).await.unwrap();
            assert_eq!(outcomes, expected, "{}", provider);
        }
    }

    #[tokio::test]
    async fn test_exactly_one_request_with_provider_auth() {
        let text = serde_json::to_string(&sample_outcomes()).unwrap();

        for provider in ProviderId::ALL {
            let client = MockHttpClient::new()
                .with_response(url_for(provider), success_body(provider, &text));
            let generator = OutcomeGenerator::new(client, &ClientConfig::default());
            generator.generate(&request(provider)).await.unwrap();

            let sent = generator.client.requests();
            assert_eq!(sent.len(), 1);

            let has = |name: &str| sent[0].headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name));
            match provider {
                ProviderId::Anthropic => {
                    assert!(has("x-api-key") && has("anthropic-version") && !has("authorization"));
                    assert!(sent[0].body["system"].is_string());
                }
                ProviderId::OpenAi => {
                    assert!(has("authorization") && !has("x-title"));
                    assert_eq!(sent[0].body["messages"][0]["role"], "system");
                }
                ProviderId::OpenRouter => {
                    assert!(has("authorization") && has("http-referer") && has("x-title"));
                    assert_eq!(sent[0].body["messages"][1]["role"], "user");
                }
            }
        }
    }

    #[tokio::test]
    async fn test_instruction_text_is_identical_across_providers() {
        let text = serde_json::to_string(&sample_outcomes()).unwrap();
        let mut systems = Vec::new();

        for provider in ProviderId::ALL {
            let client = MockHttpClient::new()
                .with_response(url_for(provider), success_body(provider, &text));
            let generator = OutcomeGenerator::new(client, &ClientConfig::default());
            generator.generate(&request(provider)).await.unwrap();

            let body = &generator.client.requests()[0].body;
            let system = match provider {
                ProviderId::Anthropic => body["system"].as_str().unwrap().to_string(),
                _ => body["messages"][0]["content"].as_str().unwrap().to_string(),
            };
            assert!(system.contains("PLO 5: Career Readiness"));
            assert!(!system.contains("PLO 3:"));
            systems.push(system);
        }

        assert!(systems.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_verbs_outside_level_are_kept() {
        let mut outcomes = sample_outcomes();
        outcomes[1].verb = "Critique".to_string();
        outcomes[1].bloom_level = "Evaluate".to_string();
        assert!(!CourseLevel::Foundational.allows_verb(&outcomes[1].verb));

        let text = serde_json::to_string(&outcomes).unwrap();
        let client = MockHttpClient::new()
            .with_response(OPENAI_URL, success_body(ProviderId::OpenAi, &text));
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let generated = generator.generate(&request(ProviderId::OpenAi)).await.unwrap();
        assert_eq!(generated, outcomes);
    }

    #[tokio::test]
    async fn test_vendor_error_message_is_surfaced() {
        let client = MockHttpClient::new().with_status(
            ANTHROPIC_URL,
            401,
            serde_json::json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            }),
        );
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let error = generator.generate(&request(ProviderId::Anthropic)).await.unwrap_err();
        assert_eq!(error.to_string(), "invalid x-api-key");
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let client = MockHttpClient::new().with_status(OPENAI_URL, 502, serde_json::Value::Null);
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let error = generator.generate(&request(ProviderId::OpenAi)).await.unwrap_err();
        assert_eq!(error, GenerationError::ApiFallback { status: 502 });
        assert_eq!(error.to_string(), "API request failed");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let client = MockHttpClient::new().with_error(OPENROUTER_URL, "connection refused");
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let error = generator.generate(&request(ProviderId::OpenRouter)).await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "Network error contacting OpenRouter: connection refused"
        );
    }

    #[tokio::test]
    async fn test_unparsable_outcomes() {
        let client = MockHttpClient::new().with_response(
            OPENAI_URL,
            success_body(ProviderId::OpenAi, "Sure! Here are four outcomes..."),
        );
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let error = generator.generate(&request(ProviderId::OpenAi)).await.unwrap_err();
        assert!(matches!(error, GenerationError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_widget_end_to_end() {
        let text = serde_json::to_string(&sample_outcomes()).unwrap();
        let client = MockHttpClient::new()
            .with_response(ANTHROPIC_URL, success_body(ProviderId::Anthropic, &text));
        let generator = OutcomeGenerator::new(client, &ClientConfig::default());

        let mut widget = GeneratorWidget::default();
        widget.select_provider(ProviderId::Anthropic);
        widget.set_api_key("sk-ant-test");
        widget.set_course_name("Drawing for Communication");

        widget.generate(&generator).await.unwrap();

        assert_eq!(widget.outcomes(), sample_outcomes().as_slice());
        assert_eq!(widget.error(), None);
    }

    #[tokio::test]
    async fn test_widget_validation_makes_no_request() {
        let generator = OutcomeGenerator::new(MockHttpClient::new(), &ClientConfig::default());

        let mut widget = GeneratorWidget::default();
        widget.set_course_name("Drawing for Communication");
        assert!(widget.generate(&generator).await.is_err());

        assert!(generator.client.requests().is_empty());
    }
}
