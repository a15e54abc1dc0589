//! LLM Client: the single point of entry for calls to the hosted text-generation model.
//!
//! Speaks the Hugging Face inference protocol: POST `{"inputs": prompt}` with a bearer
//! token, answer is `[{"generated_text": "..."}]`. One attempt per call, no retries.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Endpoint settings, supplied by `Config` at startup.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: SuggestionConfig,
}

impl LlmClient {
    pub fn new(config: SuggestionConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.api_url
    }

    /// Sends one prompt and returns the first generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&GenerationRequest { inputs: prompt })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Try to parse error message
            let message = serde_json::from_str::<InferenceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generations: Vec<GeneratedText> = serde_json::from_str(&body)?;
        let text = generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or(LlmError::EmptyContent)?;

        debug!("Generation succeeded: {} chars", text.len());
        Ok(text)
    }
}
