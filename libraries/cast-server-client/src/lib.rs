//! Cast Studio Backend Client
//!
//! Thin HTTP client for the studio backend API:
//! - Health probing
//! - Episode fetch (chunk list + persisted resume point)
//! - Chunk media URL resolution
//! - Best-effort playback-position persistence
//!
//! Transport and protocol failures surface as [`StudioClientError`];
//! wire types are re-exported from the crate root. The backend
//! itself (TTS generation, library CRUD, storage) is out of scope; this
//! crate only consumes its API.

#![forbid(unsafe_code)]

mod client;
mod episodes;
mod error;
mod playback;
mod types;

// Public exports
pub use client::StudioClient;
pub use episodes::EpisodeClient;
pub use error::{Result, StudioClientError};
pub use playback::PlaybackStateClient;
pub use types::{ClientConfig, EpisodeDetail, HealthResponse};
