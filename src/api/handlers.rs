//! HTTP API handlers.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::detector::{Analysis, Detector, StubDetector};
use crate::error::ApiError;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Analysis backend.
    pub detector: Arc<dyn Detector>,
    /// Prometheus render handle, present once the recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state backed by the placeholder detector.
    pub fn new() -> Self {
        Self {
            detector: Arc::new(StubDetector),
            metrics: None,
        }
    }

    /// Create app state with a specific analysis backend.
    pub fn with_detector(detector: Arc<dyn Detector>) -> Self {
        Self {
            detector,
            metrics: None,
        }
    }

    /// Attach a Prometheus render handle for the /metrics endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Human-readable liveness note.
    pub message: &'static str,
}

/// Analyze request body.
///
/// `text` is optional so an absent field parses cleanly and presence is
/// checked explicitly instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze.
    #[serde(default)]
    pub text: Option<String>,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    crate::metrics::inc_health_requests();

    Json(HealthResponse {
        status: "healthy",
        message: "Backend is running",
    })
}

/// Analyze handler - validates the body and runs the detector.
///
/// Malformed bodies and missing/empty text map to 400 with an `error`
/// field; a detector fault maps to 500.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let _timer = crate::metrics::timer_analyze();

    let Json(request) = payload.map_err(|rejection| {
        crate::metrics::inc_analyze_rejected();
        ApiError::bad_request(rejection.body_text())
    })?;

    let text = request.text.unwrap_or_default();
    if text.trim().is_empty() {
        crate::metrics::inc_analyze_rejected();
        return Err(ApiError::bad_request("No text provided"));
    }

    let analysis = state.detector.analyze(&text)?;
    crate::metrics::inc_analyze_requests();

    Ok(Json(analysis))
}

/// Prometheus exposition handler.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed",
        )
            .into_response(),
    }
}
