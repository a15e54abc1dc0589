use anyhow::{Context, Result};

use crate::llm_client::SuggestionConfig;

const DEFAULT_SUGGESTION_API_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-small";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_key: String,
    pub suggestion_api_url: String,
    pub suggestion_timeout_secs: u64,
    pub keyword_top_n: usize,
    pub max_upload_mb: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_api_key: require_env("HF_API_KEY")?,
            suggestion_api_url: std::env::var("SUGGESTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_SUGGESTION_API_URL.to_string()),
            suggestion_timeout_secs: parse_env("SUGGESTION_TIMEOUT_SECS", 60)?,
            keyword_top_n: parse_env("KEYWORD_TOP_N", 20)?,
            max_upload_mb: parse_env("MAX_UPLOAD_MB", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Settings handed to the suggestion client at construction.
    pub fn suggestion(&self) -> SuggestionConfig {
        SuggestionConfig {
            api_url: self.suggestion_api_url.clone(),
            api_key: self.hf_api_key.clone(),
            timeout: std::time::Duration::from_secs(self.suggestion_timeout_secs),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
