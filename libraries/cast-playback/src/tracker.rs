//! Position tracker - core orchestration
//!
//! Owns the single mutable playback cursor and converts between
//! chunk-local and episode-level time. All operations take `&mut self`
//! and run on the embedding's event thread, so each one is atomic with
//! respect to the others.

use cast_core::types::{EpisodeChunk, ResumePoint};
use std::time::Instant;

use crate::{
    error::{PlaybackError, Result},
    events::TrackerEvent,
    media::MediaSurface,
    saver::SaveScheduler,
    sequencer::ChunkSequencer,
    types::{Chunk, EpisodeProgress, PlaybackCursor, TrackerConfig, TrackerState},
};

/// Chunked playback position tracker
///
/// Composes the chunk sequencer (ordering, prefix times) with the
/// cursor, the per-episode state machine, and the pending-event queue
/// renderers drain. Chunk transitions are the only operations that touch
/// the external media surface's `load`.
///
/// One tracker instance tracks one episode at a time; `load_chunks`
/// replaces the sequence wholesale and resets the cursor.
pub struct PositionTracker {
    // Sequence and cursor
    sequencer: Option<ChunkSequencer>,
    cursor: Option<PlaybackCursor>,
    state: TrackerState,

    // Platform surface (optional so the model is testable headless)
    media: Option<Box<dyn MediaSurface>>,

    // Settings
    autoplay: bool,

    // Persistence scheduling
    saver: SaveScheduler,

    // Event queue for UI synchronization
    pending_events: Vec<TrackerEvent>,
}

impl PositionTracker {
    /// Create a new tracker with no sequence loaded
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            sequencer: None,
            cursor: None,
            state: TrackerState::Idle,
            media: None,
            autoplay: config.autoplay,
            saver: SaveScheduler::new(config.save_interval),
            pending_events: Vec::new(),
        }
    }

    /// Attach the platform media surface
    ///
    /// Without a surface the tracker still maintains cursor and state;
    /// chunk transitions simply skip the load side effect.
    pub fn set_media_surface(&mut self, surface: Box<dyn MediaSurface>) {
        self.media = Some(surface);
    }

    // ===== Sequence lifecycle =====

    /// Install a new episode's chunk sequence
    ///
    /// Replaces any previous sequence wholesale and resets the cursor,
    /// whether or not loading succeeds. Fails with `EmptySequence` when
    /// no chunk is ready; the tracker then stays `Idle` and computes no
    /// progress values.
    pub fn load_chunks(&mut self, raw_chunks: Vec<Chunk>) -> Result<()> {
        self.sequencer = None;
        self.cursor = None;
        self.set_state(TrackerState::Idle);

        let sequencer = ChunkSequencer::load(raw_chunks)?;
        self.emit(TrackerEvent::SequenceLoaded {
            chunk_count: sequencer.len(),
            total_secs: sequencer.total_duration(),
        });
        self.sequencer = Some(sequencer);
        Ok(())
    }

    /// Install a sequence from full chunk records
    ///
    /// Convenience bridge from the server's episode payload.
    pub fn load_chunk_records(&mut self, records: &[EpisodeChunk]) -> Result<()> {
        self.load_chunks(records.iter().map(Chunk::from).collect())
    }

    // ===== Resume and start =====

    /// Start playback from the first ready chunk
    pub fn start(&mut self) -> Result<()> {
        let first = self
            .sequencer
            .as_ref()
            .ok_or(PlaybackError::EmptySequence)?
            .first()
            .index;
        self.begin_chunk(first, 0.0)
    }

    /// Restore the cursor to a specific chunk and offset
    ///
    /// Used when resuming from a persisted position. When `chunk_index`
    /// is no longer in the sequence the tracker falls back to the first
    /// ready chunk at offset 0 and emits a non-fatal `ResumeFallback`.
    /// The offset is clamped to the chunk's known duration.
    pub fn resume_at(&mut self, chunk_index: u32, offset_secs: f64) -> Result<()> {
        let (target, offset, requested) = {
            let sequencer = self.sequencer.as_ref().ok_or(PlaybackError::EmptySequence)?;
            if sequencer.contains(chunk_index) {
                (chunk_index, offset_secs, None)
            } else {
                (sequencer.first().index, 0.0, Some(chunk_index))
            }
        };

        if let Some(requested_index) = requested {
            self.emit(TrackerEvent::ResumeFallback {
                requested_index,
                fallback_index: target,
            });
        }

        self.begin_chunk(target, offset)
    }

    /// Restore the cursor from a persisted resume point
    pub fn resume_from(&mut self, resume: &ResumePoint) -> Result<()> {
        self.resume_at(resume.chunk_index, resume.position_secs)
    }

    /// Resume at an episode-level percentage
    ///
    /// Maps `percent` of the total duration through the sequencer. Used
    /// when only percent survived a chunk-list regeneration.
    pub fn resume_at_percent(&mut self, percent: f64) -> Result<()> {
        let (index, offset) = {
            let sequencer = self.sequencer.as_ref().ok_or(PlaybackError::EmptySequence)?;
            let target = percent.clamp(0.0, 100.0) / 100.0 * sequencer.total_duration();
            let (chunk, offset) = sequencer.chunk_at(target);
            (chunk.index, offset)
        };
        self.begin_chunk(index, offset)
    }

    // ===== Seeking =====

    /// Seek to an episode-level time
    ///
    /// Clamps to `[0, total]`. Resolving to the current chunk mutates
    /// the offset in place; resolving to a different chunk performs a
    /// chunk transition (and thus a media load). Requires a cursor
    /// established by `start`/`resume_*`; a `Complete` tracker must be
    /// resumed explicitly first.
    pub fn seek_episode_time(&mut self, target_secs: f64) -> Result<()> {
        let cursor = self.cursor.ok_or(PlaybackError::NoActiveCursor)?;
        if self.state == TrackerState::Complete {
            return Err(PlaybackError::NoActiveCursor);
        }

        let (index, offset) = {
            let sequencer = self.sequencer.as_ref().ok_or(PlaybackError::EmptySequence)?;
            let clamped = target_secs.clamp(0.0, sequencer.total_duration());
            let (chunk, offset) = sequencer.chunk_at(clamped);
            (chunk.index, offset)
        };

        if index == cursor.chunk_index {
            self.cursor = Some(PlaybackCursor {
                chunk_index: index,
                offset_secs: offset,
            });
            self.emit(TrackerEvent::CursorChanged {
                chunk_index: index,
                offset_secs: offset,
            });
            Ok(())
        } else {
            self.begin_chunk(index, offset)
        }
    }

    /// Seek relative to the current position
    ///
    /// Clamped to the sequence bounds; no wraparound.
    pub fn skip_relative(&mut self, delta_secs: f64) -> Result<()> {
        if self.cursor.is_none() {
            return Err(PlaybackError::NoActiveCursor);
        }
        let target = self.current_episode_time() + delta_secs;
        self.seek_episode_time(target)
    }

    /// Move the cursor to the next chunk in the sequence
    ///
    /// On the last chunk this transitions to `Complete`, parks the
    /// cursor at the chunk's end so progress reads 100%, and returns
    /// `EndOfSequence`: the expected "episode finished" signal, not a
    /// retryable failure.
    pub fn advance_to_next_chunk(&mut self) -> Result<()> {
        let cursor = self.cursor.ok_or(PlaybackError::NoActiveCursor)?;
        let next = {
            let sequencer = self.sequencer.as_ref().ok_or(PlaybackError::EmptySequence)?;
            sequencer.next_after(cursor.chunk_index).map(|c| c.index)
        };

        match next {
            Some(index) => self.begin_chunk(index, 0.0),
            None => {
                let end_offset = self
                    .sequencer
                    .as_ref()
                    .and_then(|s| s.get(cursor.chunk_index))
                    .map_or(cursor.offset_secs, |c| c.duration_secs);
                self.cursor = Some(PlaybackCursor {
                    chunk_index: cursor.chunk_index,
                    offset_secs: end_offset,
                });
                self.set_state(TrackerState::Complete);
                self.emit(TrackerEvent::Complete);
                self.saver.force_due();
                Err(PlaybackError::EndOfSequence)
            }
        }
    }

    // ===== Transport =====

    /// Pause playback
    ///
    /// Arms an immediate position save; no-op unless playing.
    pub fn pause(&mut self) {
        if let TrackerState::Playing { chunk_index } = self.state {
            if let Some(media) = self.media.as_mut() {
                media.pause();
            }
            self.set_state(TrackerState::Paused { chunk_index });
            self.saver.force_due();
        }
    }

    /// Resume playback from pause
    ///
    /// Stays paused and emits `AutoplayBlocked` when the platform
    /// refuses to start.
    pub fn resume_playback(&mut self) {
        if let TrackerState::Paused { chunk_index } = self.state {
            match self.media.as_mut().map(|media| media.play()) {
                Some(Ok(())) | None => self.set_state(TrackerState::Playing { chunk_index }),
                Some(Err(_)) => self.emit(TrackerEvent::AutoplayBlocked { chunk_index }),
            }
        }
    }

    // ===== Media lifecycle hooks =====

    /// Signal that the loading chunk's media is ready
    ///
    /// With autoplay enabled the tracker attempts to start playback; a
    /// refused play (restricted autoplay policy) leaves the tracker
    /// paused rather than failing.
    pub fn on_media_ready(&mut self) {
        if let TrackerState::Loading { chunk_index } = self.state {
            if !self.autoplay {
                self.set_state(TrackerState::Paused { chunk_index });
                return;
            }

            match self.media.as_mut().map(|media| media.play()) {
                Some(Ok(())) | None => self.set_state(TrackerState::Playing { chunk_index }),
                Some(Err(_)) => {
                    self.emit(TrackerEvent::AutoplayBlocked { chunk_index });
                    self.set_state(TrackerState::Paused { chunk_index });
                }
            }
        }
    }

    /// Signal that the current chunk's media reached its end
    ///
    /// Auto-advances; running off the end of the sequence is the
    /// completion path and is surfaced via state and events, not as an
    /// error.
    pub fn on_chunk_ended(&mut self) {
        if self.cursor.is_none() {
            return;
        }
        let _ = self.advance_to_next_chunk();
    }

    /// Read the media surface's position into the cursor
    ///
    /// Called on every progress tick. Only meaningful while `Playing`;
    /// during `Loading` the readback would belong to the previous chunk,
    /// so it is ignored rather than shown under the new chunk's
    /// identity.
    pub fn sync_position(&mut self) {
        let chunk_index = match self.state {
            TrackerState::Playing { chunk_index } => chunk_index,
            _ => return,
        };

        let raw = match self.media.as_ref() {
            Some(media) => media.position(),
            None => return,
        };
        let media_duration = self.media.as_ref().and_then(|m| m.duration());

        let update = {
            let sequencer = match self.sequencer.as_ref() {
                Some(sequencer) => sequencer,
                None => return,
            };
            let chunk = match sequencer.get(chunk_index) {
                Some(chunk) => chunk,
                None => return,
            };

            let limit = if chunk.has_known_duration() {
                chunk.duration_secs
            } else {
                media_duration.unwrap_or(f64::INFINITY)
            };
            let offset = raw.clamp(0.0, limit);
            let prefix = sequencer.prefix_time(chunk_index).unwrap_or(0.0);
            (offset, prefix + offset, sequencer.total_duration())
        };

        let (offset, elapsed, total) = update;
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.offset_secs = offset;
        }
        self.emit(TrackerEvent::PositionUpdate {
            elapsed_secs: elapsed,
            total_secs: total,
        });
    }

    // ===== Derived position =====

    /// Episode-level elapsed time in seconds
    ///
    /// Prefix time of the cursor chunk plus its offset; 0.0 with no
    /// cursor.
    pub fn current_episode_time(&self) -> f64 {
        match (self.sequencer.as_ref(), self.cursor) {
            (Some(sequencer), Some(cursor)) => sequencer
                .prefix_time(cursor.chunk_index)
                .map(|prefix| prefix + cursor.offset_secs)
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Derived episode progress
    ///
    /// `None` until a sequence is loaded; an idle tracker computes no
    /// progress values.
    pub fn progress(&self) -> Option<EpisodeProgress> {
        let sequencer = self.sequencer.as_ref()?;
        Some(EpisodeProgress {
            elapsed_secs: self.current_episode_time(),
            total_secs: sequencer.total_duration(),
            durations_complete: !sequencer.has_unknown_durations(),
        })
    }

    /// Current position as a persistable resume point
    pub fn resume_point(&self) -> Option<ResumePoint> {
        let cursor = self.cursor?;
        let progress = self.progress()?;
        Some(ResumePoint::new(
            cursor.chunk_index,
            cursor.offset_secs,
            progress.percent(),
        ))
    }

    // ===== Persistence scheduling =====

    /// Whether a position save should be issued now
    ///
    /// Never due without a cursor, since there is nothing to persist.
    pub fn save_due(&mut self, now: Instant) -> bool {
        self.cursor.is_some() && self.saver.is_due(now)
    }

    /// Record that a save was issued
    pub fn mark_saved(&mut self, now: Instant) {
        self.saver.mark_saved(now);
    }

    /// Arm an immediate save (e.g. page unload)
    pub fn request_save(&mut self) {
        self.saver.force_due();
    }

    // ===== State access =====

    /// Current state machine state
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Current cursor, if established
    pub fn cursor(&self) -> Option<PlaybackCursor> {
        self.cursor
    }

    /// Whether a chunk sequence is loaded
    pub fn has_sequence(&self) -> bool {
        self.sequencer.is_some()
    }

    /// Number of playable chunks in the loaded sequence
    pub fn chunk_count(&self) -> usize {
        self.sequencer.as_ref().map_or(0, ChunkSequencer::len)
    }

    /// Total known duration of the loaded sequence in seconds
    pub fn total_duration(&self) -> f64 {
        self.sequencer
            .as_ref()
            .map_or(0.0, ChunkSequencer::total_duration)
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain. Renderers call
    /// this each frame/tick to synchronize with tracker state.
    pub fn drain_events(&mut self) -> Vec<TrackerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Move the cursor to a chunk and kick off its media load
    ///
    /// The single chunk-transition path used by start/resume/seek/
    /// advance. A failed media load leaves the tracker paused on the
    /// target chunk.
    fn begin_chunk(&mut self, to_index: u32, offset_secs: f64) -> Result<()> {
        let chunk = {
            let sequencer = self.sequencer.as_ref().ok_or(PlaybackError::EmptySequence)?;
            *sequencer
                .get(to_index)
                .ok_or(PlaybackError::UnknownChunk(to_index))?
        };

        let limit = if chunk.has_known_duration() {
            chunk.duration_secs
        } else {
            f64::INFINITY
        };
        let offset = offset_secs.clamp(0.0, limit);
        let from_index = self.cursor.map(|c| c.chunk_index);

        self.cursor = Some(PlaybackCursor {
            chunk_index: to_index,
            offset_secs: offset,
        });
        self.set_state(TrackerState::Loading {
            chunk_index: to_index,
        });
        self.emit(TrackerEvent::ChunkTransition {
            from_index,
            to_index,
        });
        self.emit(TrackerEvent::CursorChanged {
            chunk_index: to_index,
            offset_secs: offset,
        });

        if let Some(media) = self.media.as_mut() {
            if let Err(err) = media.load(&chunk) {
                self.emit(TrackerEvent::Error {
                    message: err.to_string(),
                });
                self.set_state(TrackerState::Paused {
                    chunk_index: to_index,
                });
            }
        }

        Ok(())
    }

    fn set_state(&mut self, state: TrackerState) {
        if self.state != state {
            self.state = state;
            self.emit(TrackerEvent::StateChanged { state });
        }
    }

    fn emit(&mut self, event: TrackerEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
