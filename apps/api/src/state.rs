use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::coach::recommender::ScoreJitter;
use crate::config::Config;
use crate::llm_client::AiProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `LlmClient` in production, `DisabledProvider` when no API key is set.
    pub ai: Arc<dyn AiProvider>,
    pub catalog: Arc<dyn CareerCatalog>,
    /// Jitter for fallback match percentages. Swap to `NoJitter` via DETERMINISTIC_SCORES.
    pub jitter: Arc<dyn ScoreJitter>,
    pub config: Config,
}
