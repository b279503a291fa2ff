//! Domain types for Cast Studio

mod chunk;
mod episode;
mod ids;
mod resume;

pub use chunk::{ChunkStatus, EpisodeChunk};
pub use episode::{Episode, EpisodeStatus};
pub use ids::{ChunkId, EpisodeId, SourceId};
pub use resume::ResumePoint;
