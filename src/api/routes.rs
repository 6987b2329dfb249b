//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{analyze, health, metrics, AppState};

/// Create the API router.
///
/// CORS is fully permissive: the service is consumed by browser frontends
/// on arbitrary origins.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoint
        .route("/api/health", get(health))
        // Analysis endpoint
        .route("/api/analyze", post(analyze))
        // Metrics endpoint
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
