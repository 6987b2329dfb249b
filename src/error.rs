//! Unified error types for the phishing analysis service.

use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Analysis backend error.
    #[error("analysis error: {0}")]
    Detector(#[from] DetectorError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Analysis backend errors.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// The backend could not be reached or is not loaded.
    #[error("analysis backend unavailable: {0}")]
    Unavailable(String),

    /// The backend failed while processing the text.
    #[error("analysis failed: {0}")]
    Failed(String),
}

/// Error returned at the HTTP boundary, rendered as `{"error": <message>}`.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code for the response.
    pub status: StatusCode,
    /// Message placed in the `error` field.
    pub message: String,
}

impl ApiError {
    /// Client input error (HTTP 400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Unexpected server fault (HTTP 500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DetectorError> for ApiError {
    fn from(err: DetectorError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
