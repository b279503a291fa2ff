/// Episode types - a generated audio item built from a text source
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EpisodeId, SourceId};

/// Generation status of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    /// Created, generation not started
    #[default]
    Pending,
    /// Chunk audio is being generated
    Generating,
    /// All chunks generated
    Ready,
    /// Generation failed
    Failed,
}

impl EpisodeStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Generating => "generating",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "generating" => Some(Self::Generating),
            "ready" => Some(Self::Ready),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An episode: the logical audio item composed of an ordered chunk sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Source document this episode was generated from
    pub source_id: SourceId,

    /// Display title
    pub title: String,

    /// Voice used for synthesis
    pub voice_id: String,

    /// Audio container format of the generated chunks (e.g. "wav")
    pub output_format: String,

    /// Generation status
    pub status: EpisodeStatus,

    /// Total duration in seconds, once all chunk durations are known
    pub total_duration_secs: Option<f64>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Episode {
    /// Create a new pending episode
    pub fn new(source_id: SourceId, title: impl Into<String>, voice_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EpisodeId::generate(),
            source_id,
            title: title.into(),
            voice_id: voice_id.into(),
            output_format: "wav".to_string(),
            status: EpisodeStatus::Pending,
            total_duration_secs: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_episode_is_pending() {
        let episode = Episode::new(SourceId::generate(), "Chapter One", "alba");
        assert_eq!(episode.status, EpisodeStatus::Pending);
        assert_eq!(episode.output_format, "wav");
        assert!(episode.total_duration_secs.is_none());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            EpisodeStatus::Pending,
            EpisodeStatus::Generating,
            EpisodeStatus::Ready,
            EpisodeStatus::Failed,
        ] {
            assert_eq!(EpisodeStatus::from_str(status.as_str()), Some(status));
        }
    }
}
