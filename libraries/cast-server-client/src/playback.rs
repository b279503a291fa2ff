//! Playback-position persistence for the Cast Studio backend.

use crate::error::{Result, StudioClientError};
use cast_core::types::{EpisodeId, ResumePoint};
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, warn};

/// Client for saving and restoring playback positions.
///
/// Saves are idempotent and last-write-wins by wall-clock order of the
/// calls, not response arrival order: callers should serialize saves (or
/// accept last-response-wins). The tracker's save scheduler already
/// serializes them in practice.
pub struct PlaybackStateClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PlaybackStateClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Persist a playback position for an episode.
    ///
    /// Stamps `last_played_at` with the current wall-clock time when the
    /// resume point does not carry one.
    pub async fn save_position(&self, episode_id: &EpisodeId, resume: &ResumePoint) -> Result<()> {
        let url = format!("{}/api/studio/episodes/{}/playback", self.base_url, episode_id);

        let mut payload = resume.clone();
        if payload.last_played_at.is_none() {
            payload.last_played_at = Some(Utc::now());
        }

        debug!(
            url = %url,
            chunk_index = payload.chunk_index,
            position_secs = payload.position_secs,
            "Saving playback position"
        );

        let response = self.http.put(&url).json(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 404 {
            Err(StudioClientError::EpisodeNotFound(episode_id.to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StudioClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Persist a playback position, swallowing failures.
    ///
    /// Position saves are best-effort and must never block or break the
    /// UI; a dropped save is retried on the next periodic tick or pause
    /// event. Failures are logged at `warn`.
    pub async fn save_position_best_effort(&self, episode_id: &EpisodeId, resume: &ResumePoint) {
        if let Err(err) = self.save_position(episode_id, resume).await {
            warn!(
                episode_id = %episode_id,
                error = %err,
                "Dropped playback position save"
            );
        }
    }

    /// Fetch the persisted playback position for an episode.
    ///
    /// Returns `Ok(None)` when the listener has no saved position yet.
    pub async fn get_position(&self, episode_id: &EpisodeId) -> Result<Option<ResumePoint>> {
        let url = format!("{}/api/studio/episodes/{}/playback", self.base_url, episode_id);
        debug!(url = %url, "Fetching playback position");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let resume: ResumePoint = response.json().await.map_err(|e| {
                StudioClientError::ParseError(format!("Failed to parse resume point: {}", e))
            })?;
            Ok(Some(resume))
        } else if status.as_u16() == 404 {
            Ok(None)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StudioClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
