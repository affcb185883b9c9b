use std::fmt::{self, Debug};

use super::{ApiKey, GenerationError, Instructions, ProviderId};

const SECRET_HEADERS: [&str; 2] = ["authorization", "x-api-key"];

/// A fully shaped outbound request for one provider
#[derive(Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl ProviderRequest {
    pub fn new(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Debug for ProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if SECRET_HEADERS.iter().any(|s| key.eq_ignore_ascii_case(s)) {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("ProviderRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Per-provider request shaping and response extraction
pub trait ProviderAdapter: Send + Sync + Debug {
    fn provider_id(&self) -> ProviderId;

    /// Build the request for `model`, authenticating with `api_key`
    fn build_request(
        &self,
        model: &str,
        api_key: &ApiKey,
        instructions: &Instructions,
    ) -> ProviderRequest;

    /// Pull the generated text out of a successful response body
    fn extract_text(&self, body: &serde_json::Value) -> Result<String, GenerationError>;

    /// Vendor error message from a non-success response body, if any
    fn extract_error(&self, body: &serde_json::Value) -> Option<String> {
        body.get("error")
            .and_then(|error| error.get("message"))
            .and_then(|message| message.as_str())
            .map(str::to_string)
    }
}
