use async_trait::async_trait;

use crate::domain::DomainError;

/// Status and decoded body of an HTTP response. `body` is `Null` when the
/// payload was empty or not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body. Only transport failures are errors; any status is
    /// returned to the caller.
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to read response: {}", e)))?;

        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        Ok(HttpResponse::new(status, body))
    }
}
