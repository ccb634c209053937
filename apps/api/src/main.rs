mod catalog;
mod config;
mod errors;
mod extract;
mod guidance;
mod interview;
mod llm_client;
mod models;
mod placement;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::interview::session::SessionStore;
use crate::llm_client::{GeminiClient, LanguageModel};
use crate::placement::fit_scoring::WeightedFitScorer;
use crate::resume::skills::build_vocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data: missing or broken files degrade to empty, never abort startup
    let catalog = load_catalog(&config.companies_path, &config.curriculum_path).await;
    let skill_vocabulary = build_vocabulary(&catalog);
    info!("Resume skill vocabulary: {} skills", skill_vocabulary.len());

    // Initialize LLM client (optional)
    let llm: Option<Arc<dyn LanguageModel>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
                config.llm_max_attempts,
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set; AI guidance endpoints will return 503");
            None
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        skill_vocabulary: Arc::new(skill_vocabulary),
        llm,
        config: config.clone(),
        fit_scorer: Arc::new(WeightedFitScorer::default()),
        sessions: SessionStore::new(config.interview_max_sessions, config.interview_max_messages),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
