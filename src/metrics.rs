//! Prometheus metrics for request tracking and monitoring.
//!
//! This module provides metrics for:
//! - Analyze request counts (accepted and rejected)
//! - Analyze request latency
//! - Health check counts

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Analyze request latency metric name.
pub const METRIC_ANALYZE_LATENCY: &str = "analyze_latency_ms";
/// Accepted analyze requests counter metric name.
pub const METRIC_ANALYZE_REQUESTS: &str = "analyze_requests_total";
/// Rejected analyze requests counter metric name.
pub const METRIC_ANALYZE_REJECTED: &str = "analyze_rejected_total";
/// Health check requests counter metric name.
pub const METRIC_HEALTH_REQUESTS: &str = "health_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_ANALYZE_LATENCY,
        "Analyze request latency in milliseconds"
    );

    describe_counter!(
        METRIC_ANALYZE_REQUESTS,
        "Total number of analyze requests served"
    );
    describe_counter!(
        METRIC_ANALYZE_REJECTED,
        "Total number of analyze requests rejected for invalid input"
    );
    describe_counter!(
        METRIC_HEALTH_REQUESTS,
        "Total number of health check requests"
    );

    debug!("Metrics initialized");
}

/// Record analyze request latency.
pub fn record_analyze_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_ANALYZE_LATENCY).record(latency_ms);
}

/// Increment accepted analyze requests counter.
pub fn inc_analyze_requests() {
    counter!(METRIC_ANALYZE_REQUESTS).increment(1);
}

/// Increment rejected analyze requests counter.
pub fn inc_analyze_rejected() {
    counter!(METRIC_ANALYZE_REJECTED).increment(1);
}

/// Increment health check requests counter.
pub fn inc_health_requests() {
    counter!(METRIC_HEALTH_REQUESTS).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        histogram!(self.metric_name).record(latency_ms);
    }
}

/// Create a latency timer for analyze requests.
pub fn timer_analyze() -> LatencyTimer {
    LatencyTimer::new(METRIC_ANALYZE_LATENCY)
}
