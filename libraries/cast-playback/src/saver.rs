//! Position save scheduling
//!
//! Pure timing logic for best-effort position persistence: a fixed
//! interval between periodic saves, plus forced saves on pause, unload,
//! and completion. The HTTP call itself lives in the server client;
//! saves are idempotent and a dropped save is retried on the next due
//! poll.

use std::time::{Duration, Instant};

/// Decides when a playback position save is due
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    interval: Duration,
    anchor: Option<Instant>,
    forced: bool,
}

impl SaveScheduler {
    /// Create a scheduler with the given periodic interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            anchor: None,
            forced: false,
        }
    }

    /// Whether a save should be issued now
    ///
    /// The interval is measured from the previous save (or from the
    /// first poll, so a freshly created scheduler does not fire
    /// immediately). Stays true until `mark_saved` is called, so a
    /// dropped save fires again on the next poll.
    pub fn is_due(&mut self, now: Instant) -> bool {
        let anchor = *self.anchor.get_or_insert(now);
        self.forced || now.duration_since(anchor) >= self.interval
    }

    /// Arm an immediate save (pause, unload, completion)
    pub fn force_due(&mut self) {
        self.forced = true;
    }

    /// Record that a save was issued at `now`
    pub fn mark_saved(&mut self, now: Instant) {
        self.anchor = Some(now);
        self.forced = false;
    }
}
