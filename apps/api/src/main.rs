mod catalog;
mod coach;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::PgCareerCatalog;
use crate::coach::recommender::{NoJitter, RandomJitter, ScoreJitter};
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{AiProvider, DisabledProvider, LlmClient};
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

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let catalog = Arc::new(PgCareerCatalog::new(db));

    // Initialize AI provider (fallback-only without an API key)
    let ai = build_ai_provider(&config)?;

    let jitter: Arc<dyn ScoreJitter> = if config.deterministic_scores {
        info!("Deterministic fallback scores enabled");
        Arc::new(NoJitter)
    } else {
        Arc::new(RandomJitter)
    };

    let state = AppState {
        ai,
        catalog,
        jitter,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_ai_provider(config: &Config) -> Result<Arc<dyn AiProvider>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; serving fallback responses only");
        return Ok(Arc::new(DisabledProvider));
    };

    let mut client = LlmClient::new(api_key, config.ai_timeout)?;
    if let Some(url) = &config.anthropic_api_url {
        client = client.with_api_url(url.clone());
    }
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.ai_timeout
    );
    Ok(Arc::new(client))
}
