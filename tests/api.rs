//! Integration tests for the phishing analysis HTTP API.
//!
//! These tests exercise the full router in-process with `tower::ServiceExt`
//! and assert response status codes, content types, and JSON bodies.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use phishguard::api::{create_router, AppState};

/// Build a fresh router backed by the default (stub) detector.
fn test_app() -> axum::Router {
    create_router(AppState::new())
}

/// Collect a response body into a JSON value.
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_healthy_status() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap()),
        Some("application/json")
    );

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "status": "healthy",
            "message": "Backend is running",
        })
    );
}

#[tokio::test]
async fn analyze_returns_stub_result() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap()),
        Some("application/json")
    );

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "text": "hello",
            "is_phishing": false,
            "confidence": 0.0,
            "message": "Analysis not yet implemented",
        })
    );
}

#[tokio::test]
async fn analyze_echoes_urdu_text() {
    let urdu = "\u{622}\u{67e} \u{646}\u{6d2} \u{627}\u{646}\u{639}\u{627}\u{645} \u{62c}\u{6cc}\u{62a}\u{627} \u{6c1}\u{6d2}";
    let payload = json!({ "text": urdu });

    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["text"], urdu);
    assert_eq!(body["is_phishing"], false);
}

#[tokio::test]
async fn analyze_rejects_empty_text() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "No text provided" }));
}

#[tokio::test]
async fn analyze_rejects_whitespace_only_text() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": "   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn analyze_rejects_missing_text_field() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn analyze_rejects_malformed_json() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn analyze_rejects_missing_body() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // No content type at all: the JSON extractor rejects before parsing.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn detector_fault_surfaces_as_500() {
    use phishguard::detector::{Analysis, Detector};
    use phishguard::error::DetectorError;
    use std::sync::Arc;

    struct FailingDetector;

    impl Detector for FailingDetector {
        fn analyze(&self, _text: &str) -> Result<Analysis, DetectorError> {
            Err(DetectorError::Unavailable("model not loaded".to_string()))
        }
    }

    let app = create_router(AppState::with_detector(Arc::new(FailingDetector)));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "error": "analysis backend unavailable: model not loaded" })
    );
}

#[tokio::test]
async fn cors_allows_cross_origin_requests() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/analyze")
                .header(header::ORIGIN, "https://example.com")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
