use std::sync::Arc;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::suggestions::Suggester;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Holds the shared stopword set and lemmatizer.
    pub normalizer: Normalizer,
    /// Pluggable suggestion backend. Default: LlmSuggester.
    pub suggester: Arc<dyn Suggester>,
}
