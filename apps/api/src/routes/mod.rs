pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let coach = Router::new()
        .route("/chat", post(handlers::handle_chat))
        .route("/mock-interview", post(handlers::handle_mock_interview))
        .route("/analyze-resume", post(handlers::handle_analyze_resume))
        .route("/learning-path", post(handlers::handle_learning_path))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/roadmap", post(handlers::handle_roadmap))
        .route("/features", get(handlers::handle_features));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1/ai-career-coach", coach)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::memory::InMemoryCatalog;
    use crate::coach::recommender::NoJitter;
    use crate::config::Config;
    use crate::llm_client::DisabledProvider;

    fn app() -> Router {
        build_router(AppState {
            ai: Arc::new(DisabledProvider),
            catalog: Arc::new(InMemoryCatalog::default()),
            jitter: Arc::new(NoJitter),
            config: Config::for_tests(),
        })
    }

    #[tokio::test]
    async fn test_health_reports_fallback_only_mode() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ai_enabled"], false);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ai-career-coach/horoscope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_on_compute_route_is_405() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ai-career-coach/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
