//! Media playback surface
//!
//! Abstracts the platform audio element (browser `<audio>`, native
//! player, test double). The tracker drives this surface but never
//! implements audio transport or decoding itself.

use crate::error::Result;
use crate::types::Chunk;

/// Platform media surface consumed by the tracker
///
/// Implementors resolve the chunk's media URL (e.g. through the server
/// client) and control the underlying audio element. All calls happen on
/// the tracker's event thread, so no `Send` bound is required.
///
/// The surface reports readiness and end-of-media back through the
/// embedding event loop, which forwards them to the tracker as
/// `on_media_ready` / `on_chunk_ended`.
pub trait MediaSurface {
    /// Begin loading audio for a chunk
    ///
    /// Called on every chunk transition. Loading is asynchronous; the
    /// tracker stays in `Loading` until `on_media_ready` is signalled.
    fn load(&mut self, chunk: &Chunk) -> Result<()>;

    /// Start or resume playback
    ///
    /// An error means playback could not start, typically a restricted
    /// autoplay policy. The tracker treats this as non-fatal and stays
    /// paused.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Current position within the loaded chunk, in seconds
    fn position(&self) -> f64;

    /// Duration of the loaded chunk, once the element knows it
    fn duration(&self) -> Option<f64>;
}

/// Scripted media surface for tests
///
/// Records every call and can be told to refuse `play`, simulating a
/// blocked autoplay policy.
#[cfg(test)]
pub(crate) mod test_double {
    use super::MediaSurface;
    use crate::error::{PlaybackError, Result};
    use crate::types::Chunk;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    pub struct ScriptedState {
        pub loaded: Vec<u32>,
        pub play_calls: usize,
        pub pause_calls: usize,
        pub refuse_play: bool,
        pub refuse_load: bool,
        pub position: f64,
        pub duration: Option<f64>,
    }

    #[derive(Clone, Default)]
    pub struct ScriptedMedia {
        state: Rc<RefCell<ScriptedState>>,
    }

    impl ScriptedMedia {
        pub fn new() -> Self {
            Self::default()
        }

        /// Shared handle for inspecting calls after the surface is boxed
        pub fn handle(&self) -> Rc<RefCell<ScriptedState>> {
            Rc::clone(&self.state)
        }
    }

    impl MediaSurface for ScriptedMedia {
        fn load(&mut self, chunk: &Chunk) -> Result<()> {
            let mut state = self.state.borrow_mut();
            if state.refuse_load {
                return Err(PlaybackError::MediaLoad("load refused".to_string()));
            }
            state.loaded.push(chunk.index);
            state.position = 0.0;
            state.duration = chunk.has_known_duration().then_some(chunk.duration_secs);
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            let mut state = self.state.borrow_mut();
            state.play_calls += 1;
            if state.refuse_play {
                return Err(PlaybackError::MediaLoad("autoplay blocked".to_string()));
            }
            Ok(())
        }

        fn pause(&mut self) {
            self.state.borrow_mut().pause_calls += 1;
        }

        fn position(&self) -> f64 {
            self.state.borrow().position
        }

        fn duration(&self) -> Option<f64> {
            self.state.borrow().duration
        }
    }
}
