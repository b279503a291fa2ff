//! Core types for playback position tracking

use cast_core::types::EpisodeChunk;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback view of one episode chunk
///
/// Carries only what position tracking needs. The full chunk record
/// (text, status, audio path) lives in `cast-core`; this view is derived
/// from it when an episode is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position within the episode (0-based, unique, gaps allowed)
    pub index: u32,

    /// Duration in seconds; 0.0 when the backend has not measured it yet
    pub duration_secs: f64,

    /// Whether the chunk's audio is available for playback
    pub ready: bool,
}

impl Chunk {
    /// Create a ready chunk with a known duration
    pub fn new(index: u32, duration_secs: f64) -> Self {
        Self {
            index,
            duration_secs: duration_secs.max(0.0),
            ready: true,
        }
    }

    /// Create a chunk that is not yet playable
    pub fn pending(index: u32) -> Self {
        Self {
            index,
            duration_secs: 0.0,
            ready: false,
        }
    }

    /// Whether the backend reported a measured duration
    ///
    /// A zero duration is treated as unknown for estimation purposes.
    pub fn has_known_duration(&self) -> bool {
        self.duration_secs > 0.0
    }
}

impl From<&EpisodeChunk> for Chunk {
    fn from(chunk: &EpisodeChunk) -> Self {
        Self {
            index: chunk.index,
            duration_secs: chunk.duration_secs.unwrap_or(0.0).max(0.0),
            ready: chunk.is_playable(),
        }
    }
}

/// Current playback position: chunk index plus a sub-chunk offset
///
/// Owned exclusively by the tracker; mutated only through its operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackCursor {
    /// Index of the active chunk (always present in the ready sequence)
    pub chunk_index: u32,

    /// Seconds into the active chunk, in `[0, chunk.duration_secs]`
    pub offset_secs: f64,
}

/// Episode-level progress derived from the cursor and chunk durations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeProgress {
    /// Seconds elapsed: prefix time of the cursor chunk plus its offset
    pub elapsed_secs: f64,

    /// Sum of all known chunk durations
    pub total_secs: f64,

    /// False when any ready chunk has an unknown duration, in which case
    /// `total_secs` is only a lower bound
    pub durations_complete: bool,
}

impl EpisodeProgress {
    /// Progress ratio in `[0.0, 1.0]`
    ///
    /// Returns 0.0 for an episode with no known duration.
    pub fn ratio(&self) -> f64 {
        if self.total_secs <= 0.0 {
            return 0.0;
        }
        (self.elapsed_secs / self.total_secs).clamp(0.0, 1.0)
    }

    /// Progress in percent (0-100)
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Tracker state machine, per episode
///
/// `Complete` is terminal until a new resume or chunk-list load resets
/// the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackerState {
    /// No cursor established
    Idle,

    /// Chunk media load outstanding
    Loading {
        /// Chunk being loaded
        chunk_index: u32,
    },

    /// Actively playing
    Playing {
        /// Chunk being played
        chunk_index: u32,
    },

    /// Paused mid-chunk (including blocked autoplay)
    Paused {
        /// Chunk the cursor rests on
        chunk_index: u32,
    },

    /// Episode finished
    Complete,
}

impl TrackerState {
    /// Chunk index this state refers to, if any
    pub fn chunk_index(&self) -> Option<u32> {
        match self {
            Self::Loading { chunk_index }
            | Self::Playing { chunk_index }
            | Self::Paused { chunk_index } => Some(*chunk_index),
            Self::Idle | Self::Complete => None,
        }
    }
}

/// Configuration for the position tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Attempt playback as soon as chunk media is ready (default: true)
    ///
    /// Autoplay may still be blocked by the platform; the tracker then
    /// stays paused rather than failing.
    pub autoplay: bool,

    /// Interval between periodic position saves (default: 30s)
    pub save_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            save_interval: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cast_core::types::{ChunkId, ChunkStatus};

    #[test]
    fn default_config() {
        let config = TrackerConfig::default();
        assert!(config.autoplay);
        assert_eq!(config.save_interval, Duration::from_secs(30));
    }

    #[test]
    fn chunk_from_episode_chunk() {
        let record = EpisodeChunk {
            id: ChunkId::new("c3"),
            index: 3,
            text: "Some sentence.".to_string(),
            audio_path: Some("ep/3.wav".to_string()),
            duration_secs: Some(12.5),
            status: ChunkStatus::Ready,
            error_message: None,
        };

        let chunk = Chunk::from(&record);
        assert_eq!(chunk.index, 3);
        assert_eq!(chunk.duration_secs, 12.5);
        assert!(chunk.ready);
    }

    #[test]
    fn unmeasured_duration_maps_to_zero() {
        let record = EpisodeChunk {
            id: ChunkId::new("c0"),
            index: 0,
            text: String::new(),
            audio_path: Some("ep/0.wav".to_string()),
            duration_secs: None,
            status: ChunkStatus::Ready,
            error_message: None,
        };

        let chunk = Chunk::from(&record);
        assert_eq!(chunk.duration_secs, 0.0);
        assert!(!chunk.has_known_duration());
    }

    #[test]
    fn progress_ratio_clamps() {
        let progress = EpisodeProgress {
            elapsed_secs: 90.0,
            total_secs: 60.0,
            durations_complete: false,
        };
        assert_eq!(progress.ratio(), 1.0);

        let empty = EpisodeProgress {
            elapsed_secs: 0.0,
            total_secs: 0.0,
            durations_complete: false,
        };
        assert_eq!(empty.ratio(), 0.0);
    }

    #[test]
    fn state_chunk_index() {
        assert_eq!(TrackerState::Playing { chunk_index: 4 }.chunk_index(), Some(4));
        assert_eq!(TrackerState::Idle.chunk_index(), None);
        assert_eq!(TrackerState::Complete.chunk_index(), None);
    }
}
