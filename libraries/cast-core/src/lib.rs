//! Cast Studio Core
//!
//! Shared domain types and error handling for the Cast Studio playback
//! client.
//!
//! This crate provides the foundational building blocks used by the
//! playback tracker and the server client:
//! - **Domain Types**: `Episode`, `EpisodeChunk`, `ResumePoint`, etc.
//! - **Typed IDs**: `EpisodeId`, `SourceId`, `ChunkId`
//! - **Error Handling**: unified `CastError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cast_core::types::{Episode, ResumePoint, SourceId};
//!
//! let episode = Episode::new(SourceId::generate(), "Chapter One", "alba");
//! let resume = ResumePoint::new(3, 12.5, 41.0);
//!
//! assert_eq!(resume.chunk_index, 3);
//! assert!(episode.total_duration_secs.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CastError, Result};
pub use types::{
    ChunkStatus, ChunkId, Episode, EpisodeChunk, EpisodeId, EpisodeStatus, ResumePoint, SourceId,
};
