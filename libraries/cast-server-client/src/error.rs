//! Error types for the Cast Studio backend client.

use thiserror::Error;

/// Errors that can occur when interacting with the studio backend.
#[derive(Error, Debug)]
pub enum StudioClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, when the server provided one
        message: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Episode does not exist on the server
    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    /// Chunk has no generated audio to play
    #[error("Chunk {index} has no playable audio")]
    ChunkNotPlayable {
        /// Index of the chunk within its episode
        index: u32,
    },
}

/// Result type for studio client operations.
pub type Result<T> = std::result::Result<T, StudioClientError>;
