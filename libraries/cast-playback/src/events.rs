//! Tracker events
//!
//! Event-based communication for UI synchronization. The tracker never
//! reaches into rendering code; it queues typed events that renderers
//! drain and react to:
//! - Sequence/state changes (load, play/pause, completion)
//! - Cursor movement (seek, skip, chunk transition)
//! - Position updates (periodic)
//! - Soft recoveries (resume fallback, blocked autoplay)

use serde::{Deserialize, Serialize};

use crate::types::TrackerState;

/// Events emitted by the position tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackerEvent {
    /// A new chunk sequence was installed
    SequenceLoaded {
        /// Number of playable chunks
        chunk_count: usize,
        /// Sum of known durations in seconds
        total_secs: f64,
    },

    /// Tracker state machine moved to a new state
    StateChanged {
        /// The new state
        state: TrackerState,
    },

    /// Cursor position changed (seek, skip, tick, or transition)
    CursorChanged {
        /// Active chunk index
        chunk_index: u32,
        /// Seconds into the active chunk
        offset_secs: f64,
    },

    /// Cursor moved to a different chunk; chunk media must be loaded
    ///
    /// The only event tied to an external side effect: the tracker has
    /// issued `load` on its media surface for `to_index`.
    ChunkTransition {
        /// Chunk the cursor left, if any
        from_index: Option<u32>,
        /// Chunk the cursor moved to
        to_index: u32,
    },

    /// A resume target was missing; playback fell back to another chunk
    ResumeFallback {
        /// Chunk index requested by the resume point
        requested_index: u32,
        /// Chunk index actually used
        fallback_index: u32,
    },

    /// The platform refused to start playback (autoplay policy)
    ///
    /// Expected environment condition, not an error: the tracker stays
    /// paused and waits for a user gesture.
    AutoplayBlocked {
        /// Chunk that stayed paused
        chunk_index: u32,
    },

    /// Periodic progress readback
    PositionUpdate {
        /// Episode-level elapsed seconds
        elapsed_secs: f64,
        /// Episode-level total seconds (lower bound if durations are
        /// incomplete)
        total_secs: f64,
    },

    /// Episode finished: advance ran off the end of the sequence
    Complete,

    /// A recoverable failure occurred (e.g. chunk media failed to load)
    Error {
        /// Human-readable description
        message: String,
    },
}
