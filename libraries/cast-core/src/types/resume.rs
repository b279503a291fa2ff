/// Resume point - persisted playback position for an episode
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted playback position, used to continue an episode after reload
///
/// The position is stored both as a chunk-local coordinate
/// (`chunk_index` + `position_secs`) and as an episode-level
/// `percent_listened`. The percent exists so a resume can still land
/// somewhere sensible when the chunk list has been regenerated and the
/// stored index no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumePoint {
    /// Chunk the listener was on
    pub chunk_index: u32,

    /// Seconds into that chunk
    pub position_secs: f64,

    /// Episode-level progress in percent (0-100)
    pub percent_listened: f64,

    /// When this position was last saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<DateTime<Utc>>,
}

impl ResumePoint {
    /// Create a resume point without a timestamp
    pub fn new(chunk_index: u32, position_secs: f64, percent_listened: f64) -> Self {
        Self {
            chunk_index,
            position_secs: position_secs.max(0.0),
            percent_listened: percent_listened.clamp(0.0, 100.0),
            last_played_at: None,
        }
    }

    /// Attach a last-played timestamp
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.last_played_at = Some(at);
        self
    }
}

impl Default for ResumePoint {
    fn default() -> Self {
        Self::new(0, 0.0, 0.0)
    }
}
