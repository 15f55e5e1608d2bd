//! Configuration management for the web service.
//!
//! Everything comes from environment variables, read once at startup. The
//! Gemini credential has no default and no fallback: a missing key fails
//! fast with a configuration error before any network call is possible.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: upstream credential (required)
//! - `GEMINI_MODEL`: model identifier (default: gemini-2.5-flash)
//! - `GEMINI_BASE_URL`: API base URL override (default: official endpoint)
//! - `GEMINI_TIMEOUT_SECS`: request timeout in seconds (default: 30)
//! - `GEMINI_TEMPERATURE`: sampling temperature, clamped to [0, 1] (default: 0.6)
//! - `GEMINI_MAX_OUTPUT_TOKENS`: output token cap (default: 1000)

use std::time::Duration;

use planner_llm::{GeminiClient, GenerationConfig};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GeminiSettings {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "Missing GEMINI_API_KEY environment variable".to_string(),
                )
            })?;

        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            timeout: Duration::from_secs(
                std::env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            temperature: std::env::var("GEMINI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.6),
            max_output_tokens: std::env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        })
    }

    pub fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key)
            .with_model(&self.model)
            .with_timeout(self.timeout);
        match &self.base_url {
            Some(url) => client.with_base_url(url),
            None => client,
        }
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            // Gemini rejects temperatures outside [0, 1].
            temperature: self.temperature.clamp(0.0, 1.0),
            max_output_tokens: self.max_output_tokens,
            ..GenerationConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GeminiSettings {
        GeminiSettings {
            api_key: "k".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            timeout: Duration::from_secs(30),
            temperature: 0.6,
            max_output_tokens: 1000,
        }
    }

    #[test]
    fn test_generation_config_carries_settings() {
        let config = settings().generation_config();
        assert_eq!(config.temperature, 0.6);
        assert_eq!(config.max_output_tokens, 1000);
        // Remaining parameters keep their protocol defaults.
        assert_eq!(config.top_k, 40);
        assert_eq!(config.candidate_count, 1);
    }

    #[test]
    fn test_out_of_range_temperature_is_clamped() {
        let mut hot = settings();
        hot.temperature = 7.5;
        assert_eq!(hot.generation_config().temperature, 1.0);

        let mut cold = settings();
        cold.temperature = -1.0;
        assert_eq!(cold.generation_config().temperature, 0.0);
    }

    #[test]
    fn test_missing_api_key_is_a_configuration_error() {
        // No other test in this binary touches this variable.
        std::env::remove_var("GEMINI_API_KEY");

        let err = GeminiSettings::from_env().unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
