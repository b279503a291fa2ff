//! Chunk sequencer
//!
//! Maintains the ready-chunk sequence in ascending index order and
//! answers positional queries over it: prefix times, total duration, and
//! episode-time to chunk+offset resolution.

use crate::error::{PlaybackError, Result};
use crate::types::Chunk;

/// Ordered sequence of playable chunks with precomputed prefix durations
///
/// Construction filters out chunks that are not ready and fails when
/// nothing playable remains, so a sequencer is never empty. The prefix
/// table has one entry per chunk plus a trailing total, so
/// `prefix[i]` is the episode time at which `chunks[i]` begins and
/// `prefix[len]` is the total duration.
#[derive(Debug, Clone)]
pub struct ChunkSequencer {
    chunks: Vec<Chunk>,
    prefix: Vec<f64>,
}

impl ChunkSequencer {
    /// Build a sequencer from a raw chunk list
    ///
    /// Keeps only ready chunks. Source order is assumed ascending by
    /// index; if it is not, the chunks are sorted. Unknown durations
    /// contribute 0 to the prefix table.
    pub fn load(raw_chunks: Vec<Chunk>) -> Result<Self> {
        let mut chunks: Vec<Chunk> = raw_chunks.into_iter().filter(|c| c.ready).collect();

        if chunks.is_empty() {
            return Err(PlaybackError::EmptySequence);
        }

        if !chunks.windows(2).all(|w| w[0].index < w[1].index) {
            chunks.sort_by_key(|c| c.index);
        }

        let mut prefix = Vec::with_capacity(chunks.len() + 1);
        let mut acc = 0.0;
        prefix.push(acc);
        for chunk in &chunks {
            acc += chunk.duration_secs;
            prefix.push(acc);
        }

        Ok(Self { chunks, prefix })
    }

    /// Position of `chunk_index` within the ordered sequence
    fn position_of(&self, chunk_index: u32) -> Option<usize> {
        self.chunks
            .binary_search_by_key(&chunk_index, |c| c.index)
            .ok()
    }

    /// Sum of durations of ready chunks strictly before `chunk_index`
    ///
    /// Fails with `UnknownChunk` when the index is not in the sequence;
    /// callers recover by falling back to the first chunk.
    pub fn prefix_time(&self, chunk_index: u32) -> Result<f64> {
        self.position_of(chunk_index)
            .map(|pos| self.prefix[pos])
            .ok_or(PlaybackError::UnknownChunk(chunk_index))
    }

    /// Sum of all known chunk durations
    ///
    /// Chunks with unknown duration contribute nothing, so this is a
    /// lower bound whenever `has_unknown_durations` is true.
    pub fn total_duration(&self) -> f64 {
        self.prefix[self.chunks.len()]
    }

    /// Whether any chunk in the sequence lacks a measured duration
    pub fn has_unknown_durations(&self) -> bool {
        self.chunks.iter().any(|c| !c.has_known_duration())
    }

    /// Resolve an episode-elapsed time to a chunk and sub-chunk offset
    ///
    /// Each chunk owns the half-open interval
    /// `[prefix, prefix + duration)`, so a time landing exactly on a
    /// boundary resolves to the later chunk. Times at or past the total
    /// duration resolve to the last chunk with the offset clamped to its
    /// duration.
    pub fn chunk_at(&self, time: f64) -> (&Chunk, f64) {
        let time = time.max(0.0);
        let last = self.chunks.len() - 1;

        // First chunk whose interval end is past `time`
        let pos = self.prefix[1..].partition_point(|&end| end <= time);

        if pos > last {
            let chunk = &self.chunks[last];
            let offset = (time - self.prefix[last]).min(chunk.duration_secs);
            return (chunk, offset);
        }

        (&self.chunks[pos], time - self.prefix[pos])
    }

    /// First chunk in the sequence
    pub fn first(&self) -> &Chunk {
        &self.chunks[0]
    }

    /// Last chunk in the sequence
    pub fn last(&self) -> &Chunk {
        &self.chunks[self.chunks.len() - 1]
    }

    /// Chunk with the given index, if present
    pub fn get(&self, chunk_index: u32) -> Option<&Chunk> {
        self.position_of(chunk_index).map(|pos| &self.chunks[pos])
    }

    /// Chunk following `chunk_index` in sequence order
    ///
    /// Returns `None` when `chunk_index` is the last chunk or absent.
    pub fn next_after(&self, chunk_index: u32) -> Option<&Chunk> {
        let pos = self.position_of(chunk_index)?;
        self.chunks.get(pos + 1)
    }

    /// Whether the sequence contains `chunk_index`
    pub fn contains(&self, chunk_index: u32) -> bool {
        self.position_of(chunk_index).is_some()
    }

    /// Number of playable chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// All chunks in ascending index order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}
