//! HTTP server setup and routing.

mod predict;

use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::service::SentimentService;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<SentimentService>,
}

impl AppState {
    pub fn new(config: AppConfig, service: SentimentService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}

/// Creates the application router with all routes configured.
///
/// `/predict` only answers POST; every other method lands on the fallback,
/// which reports failure in the same envelope instead of an empty 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/predict",
            post(predict::predict).fallback(predict::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
