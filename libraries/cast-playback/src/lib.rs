//! Cast Studio - Chunked Playback Position Tracking
//!
//! Platform-agnostic playback position model for chunked episodes.
//!
//! This crate provides:
//! - Chunk sequencing with prefix-sum duration lookup
//! - A position tracker owning the (chunk index, offset) cursor
//! - Episode-time ↔ chunk+offset mapping (seek, skip, resume)
//! - A per-episode state machine (Idle/Loading/Playing/Paused/Complete)
//! - Typed state-change events for renderers
//! - Position save scheduling (periodic + on pause/unload)
//! - A words-per-second sentence timing heuristic for captions
//!
//! # Architecture
//!
//! `cast-playback` is completely platform-agnostic:
//! - No dependency on any audio backend or DOM API
//! - No network I/O (episode fetch and position persistence live in
//!   `cast-server-client`)
//! - Single-threaded by design: every operation takes `&mut self`, so
//!   operations are atomic with respect to each other on the embedding's
//!   event thread
//!
//! Platform-specific media control (the audio element) is provided via
//! the [`MediaSurface`] trait; renderers synchronize by draining typed
//! [`TrackerEvent`]s instead of being called back into.
//!
//! # Example: Seeking across chunks
//!
//! ```rust
//! use cast_playback::{Chunk, PositionTracker, TrackerConfig};
//!
//! let mut tracker = PositionTracker::new(TrackerConfig::default());
//!
//! tracker
//!     .load_chunks(vec![
//!         Chunk::new(0, 100.0),
//!         Chunk::new(1, 50.0),
//!         Chunk::new(2, 30.0),
//!     ])
//!     .unwrap();
//!
//! tracker.start().unwrap();
//! tracker.seek_episode_time(120.0).unwrap();
//!
//! // 120s lands 20s into the second chunk.
//! let cursor = tracker.cursor().unwrap();
//! assert_eq!(cursor.chunk_index, 1);
//! assert_eq!(cursor.offset_secs, 20.0);
//! assert_eq!(tracker.current_episode_time(), 120.0);
//! ```
//!
//! # Example: Resuming a persisted position
//!
//! ```rust
//! use cast_core::types::ResumePoint;
//! use cast_playback::{Chunk, PositionTracker};
//!
//! let mut tracker = PositionTracker::default();
//! tracker
//!     .load_chunks(vec![Chunk::new(0, 60.0), Chunk::new(1, 60.0)])
//!     .unwrap();
//!
//! tracker.resume_from(&ResumePoint::new(1, 12.0, 60.0)).unwrap();
//! assert_eq!(tracker.cursor().unwrap().chunk_index, 1);
//! ```

mod error;
mod events;
mod media;
mod saver;
mod sequencer;
mod timing;
mod tracker;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::TrackerEvent;
pub use media::MediaSurface;
pub use saver::SaveScheduler;
pub use sequencer::ChunkSequencer;
pub use timing::{sentence_index_at, sentence_timings, SentenceTiming, WORDS_PER_SECOND};
pub use tracker::PositionTracker;
pub use types::{Chunk, EpisodeProgress, PlaybackCursor, TrackerConfig, TrackerState};
