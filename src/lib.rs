//! Urdu text phishing analysis API server.
//!
//! The detection backend is an explicit placeholder: every analysis request
//! returns a constant non-phishing result until a real classifier lands
//! behind the [`detector::Detector`] trait. The rest of the service is real:
//! JSON request validation, error mapping, CORS, metrics, and health checks.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`detector`]: Analysis seam and the placeholder detector
//! - [`api`]: HTTP API for health and analysis
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod detector;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
