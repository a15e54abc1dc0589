mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::suggestions::LlmSuggester;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-match v{}", env!("CARGO_PKG_VERSION"));

    // Stopwords and lemmatizer are built once and shared read-only
    let lexicon = Arc::new(Lexicon::english());
    info!("Lexicon loaded ({} stopwords)", lexicon.stopword_count());

    // Initialize suggestion client
    let llm = LlmClient::new(config.suggestion())?;
    info!("Suggestion client initialized (endpoint: {})", llm.endpoint());

    // Build app state
    let state = AppState {
        config: config.clone(),
        normalizer: Normalizer::new(lexicon),
        suggester: Arc::new(LlmSuggester(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload form has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
