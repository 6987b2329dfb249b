//! Phishing analysis seam and the placeholder detector.
//!
//! Detection for Urdu text is not implemented yet. [`StubDetector`] stands in
//! for the eventual classifier and always reports non-phishing with zero
//! confidence. Handlers depend on the [`Detector`] trait so a real backend
//! can replace the stub without touching the HTTP layer.

use serde::Serialize;

use crate::error::DetectorError;

/// Message returned while the detection backend is a placeholder.
pub const PLACEHOLDER_MESSAGE: &str = "Analysis not yet implemented";

/// Result of analyzing a single piece of text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The text that was analyzed, echoed back.
    pub text: String,
    /// Whether the text was classified as phishing.
    pub is_phishing: bool,
    /// Classifier confidence in the range [0.0, 1.0].
    pub confidence: f64,
    /// Human-readable note about the analysis.
    pub message: String,
}

/// Analysis backend interface.
pub trait Detector: Send + Sync {
    /// Analyze a piece of text. The caller has already checked that the
    /// text is non-empty.
    fn analyze(&self, text: &str) -> Result<Analysis, DetectorError>;
}

/// Placeholder detector: always returns a constant non-phishing result.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubDetector;

impl Detector for StubDetector {
    fn analyze(&self, text: &str) -> Result<Analysis, DetectorError> {
        Ok(Analysis {
            text: text.to_string(),
            is_phishing: false,
            confidence: 0.0,
            message: PLACEHOLDER_MESSAGE.to_string(),
        })
    }
}
