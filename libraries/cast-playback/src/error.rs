//! Error types for playback position tracking

use thiserror::Error;

/// Playback tracking errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No chunk in the loaded list is ready for playback
    #[error("No playable chunks in sequence")]
    EmptySequence,

    /// Chunk index is not present in the ready sequence
    #[error("Unknown chunk index: {0}")]
    UnknownChunk(u32),

    /// Advance was called on the last chunk of the sequence
    ///
    /// This is the expected terminal condition, not a failure: the
    /// tracker transitions to `Complete` before returning it.
    #[error("End of chunk sequence")]
    EndOfSequence,

    /// Operation requires a cursor established by a resume or start
    #[error("No active playback cursor")]
    NoActiveCursor,

    /// The media surface failed to load a chunk
    #[error("Media load failed: {0}")]
    MediaLoad(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
