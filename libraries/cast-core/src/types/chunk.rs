/// Chunk types - one generated audio segment of an episode
use serde::{Deserialize, Serialize};

use crate::types::ChunkId;

/// Generation status of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStatus {
    /// Queued, audio not yet generated
    #[default]
    Pending,
    /// Audio generation in progress
    Processing,
    /// Audio generated and available for playback
    Ready,
    /// Generation failed (see `error_message`)
    Failed,
}

impl ChunkStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "ready" => Some(Self::Ready),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChunkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One chunk of an episode's generated audio
///
/// Chunks are addressed by `index` within their episode. Index gaps are
/// allowed (failed chunks may be dropped server-side); order is always
/// ascending by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeChunk {
    /// Unique chunk identifier
    pub id: ChunkId,

    /// Position within the episode (0-based, gaps allowed)
    pub index: u32,

    /// Source text this chunk was synthesized from
    pub text: String,

    /// Server-side audio path (present once generated)
    pub audio_path: Option<String>,

    /// Measured audio duration in seconds (None until generated)
    pub duration_secs: Option<f64>,

    /// Generation status
    pub status: ChunkStatus,

    /// Failure detail when `status` is `Failed`
    pub error_message: Option<String>,
}

impl EpisodeChunk {
    /// Whether this chunk can be played right now
    ///
    /// Requires generated audio, not just a `Ready` status row.
    pub fn is_playable(&self) -> bool {
        self.status == ChunkStatus::Ready && self.audio_path.is_some()
    }
}
