//! Gemini API client.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{LLMError, Result};
use crate::protocol::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Google Gemini API client.
///
/// Holds no mutable state; cloning is cheap and concurrent invocations are
/// fully independent. Exactly one outbound call per invocation, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new client with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (e.g., for proxies or a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-2.5-flash").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound the request timeout. Expiry surfaces as `ServiceUnavailable`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send one conversation to the model and return the raw response text.
    ///
    /// The key is checked before the request is built, so a missing
    /// credential never costs a network round trip.
    pub async fn generate_content(
        &self,
        contents: Vec<Content>,
        config: &GenerationConfig,
    ) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(LLMError::Auth(
                "no Gemini API key configured".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents,
            generation_config: Some(config.clone()),
        };

        log::debug!("Gemini generateContent: model='{}'", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_error_message(&body);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::Auth(message),
                StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimited(message),
                _ => LLMError::ServiceUnavailable(format!("HTTP {}: {}", status.as_u16(), message)),
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LLMError::MalformedUpstream(e.without_url().to_string()))?;

        Ok(envelope.first_text())
    }

    /// Convenience wrapper for a single user prompt.
    pub async fn generate_text(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        self.generate_content(vec![Content::user(prompt)], config)
            .await
    }
}

/// Transport-level failures all map to `ServiceUnavailable`. The URL is
/// stripped before stringifying so the key query parameter never leaks.
fn classify_transport_error(error: reqwest::Error) -> LLMError {
    if error.is_timeout() {
        return LLMError::ServiceUnavailable("request timed out".to_string());
    }
    LLMError::ServiceUnavailable(error.without_url().to_string())
}

/// Pull `error.message` out of a Gemini error body when it is JSON,
/// otherwise fall back to a generic description.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            "Failed to generate plan. The API key may be invalid, the model may be unavailable, \
             or you may be rate limited."
                .to_string()
        })
}
