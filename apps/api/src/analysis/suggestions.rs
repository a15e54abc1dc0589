//! Suggestions: asks the text-generation model how to cover missing keywords.
//!
//! `AppState` holds an `Arc<dyn Suggester>`; `LlmSuggester` is the production backend.
//! Failures never escape: they become `SuggestionOutcome::Unavailable`.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::prompts::build_suggestion_prompt;
use crate::llm_client::LlmClient;

/// Shown in place of suggestions when the model could not be reached.
pub const FALLBACK_SUGGESTION: &str = "AI suggestion not available at the moment.";

/// What happened to the suggestion request for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    Generated { text: String },
    Unavailable { reason: String },
    /// Every keyword was covered, so the model was never called.
    NotRequested,
}

impl SuggestionOutcome {
    /// Text for display: the suggestions, the fallback message, or nothing.
    pub fn display_text(&self) -> &str {
        match self {
            SuggestionOutcome::Generated { text } => text.as_str(),
            SuggestionOutcome::Unavailable { .. } => FALLBACK_SUGGESTION,
            SuggestionOutcome::NotRequested => "",
        }
    }
}

/// Implement this to swap suggestion backends without touching the pipeline.
#[async_trait]
pub trait Suggester: Send + Sync {
    async fn suggest(&self, missing: &[String]) -> SuggestionOutcome;
}

pub struct LlmSuggester(pub LlmClient);

#[async_trait]
impl Suggester for LlmSuggester {
    async fn suggest(&self, missing: &[String]) -> SuggestionOutcome {
        let prompt = build_suggestion_prompt(missing);
        match self.0.generate(&prompt).await {
            Ok(text) => {
                info!("Received suggestions for {} missing keywords", missing.len());
                SuggestionOutcome::Generated { text }
            }
            Err(e) => {
                warn!("Suggestion request to {} failed: {e}", self.0.endpoint());
                SuggestionOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Calls the suggester only when there is something missing.
pub async fn suggest_for_missing(
    suggester: &dyn Suggester,
    missing: &[String],
) -> SuggestionOutcome {
    if missing.is_empty() {
        return SuggestionOutcome::NotRequested;
    }
    suggester.suggest(missing).await
}
