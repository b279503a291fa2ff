//! Types for Cast Studio backend API requests and responses.

use cast_core::types::{EpisodeChunk, EpisodeId, EpisodeStatus, ResumePoint};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a studio backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g. "http://localhost:5000")
    pub url: String,
}

impl ClientConfig {
    /// Create a new client config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// =============================================================================
// Health Types
// =============================================================================

/// Backend health probe response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Whether the TTS model is loaded
    pub model_loaded: bool,
    /// Output sample rate of the loaded model
    pub sample_rate: Option<u32>,
}

impl HealthResponse {
    /// Whether the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// =============================================================================
// Episode Types
// =============================================================================

/// An episode as returned by the server, with its chunk list and the
/// persisted resume point (if any).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EpisodeDetail {
    /// Episode identifier
    pub id: EpisodeId,
    /// Display title
    pub title: String,
    /// Generation status
    pub status: EpisodeStatus,
    /// Total duration in seconds, once known
    pub total_duration_secs: Option<f64>,
    /// Chunks in ascending index order
    pub chunks: Vec<EpisodeChunk>,
    /// Persisted playback position, when the listener has one
    pub resume: Option<ResumePoint>,
}
