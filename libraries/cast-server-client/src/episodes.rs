//! Episode operations for the Cast Studio backend.

use crate::error::{Result, StudioClientError};
use crate::types::EpisodeDetail;
use cast_core::types::{Episode, EpisodeChunk, EpisodeId};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Episode client for the studio backend.
pub struct EpisodeClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> EpisodeClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// List all episodes in the library.
    ///
    /// Returns summary records without chunk lists; use [`get`] for the
    /// playable detail of a single episode.
    ///
    /// [`get`]: EpisodeClient::get
    pub async fn list(&self) -> Result<Vec<Episode>> {
        let url = format!("{}/api/studio/episodes", self.base_url);
        debug!(url = %url, "Listing episodes");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let episodes: Vec<Episode> = response.json().await.map_err(|e| {
                StudioClientError::ParseError(format!("Failed to parse episode list: {}", e))
            })?;

            debug!(episodes = episodes.len(), "Listed episodes");

            Ok(episodes)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StudioClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch an episode by id, with its chunk list and resume point.
    pub async fn get(&self, episode_id: &EpisodeId) -> Result<EpisodeDetail> {
        let url = format!("{}/api/studio/episodes/{}", self.base_url, episode_id);
        debug!(url = %url, episode_id = %episode_id, "Fetching episode");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let episode: EpisodeDetail = response.json().await.map_err(|e| {
                StudioClientError::ParseError(format!("Failed to parse episode response: {}", e))
            })?;

            debug!(
                episode_id = %episode.id,
                chunks = episode.chunks.len(),
                status = %episode.status,
                "Fetched episode"
            );

            Ok(episode)
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

    /// Resolve the media URL for a chunk's audio.
    ///
    /// This is the URL a media surface loads on chunk transition. Fails
    /// with `ChunkNotPlayable` when the chunk has no generated audio
    /// yet.
    pub fn chunk_audio_url(&self, chunk: &EpisodeChunk) -> Result<Url> {
        let audio_path = chunk
            .audio_path
            .as_deref()
            .ok_or(StudioClientError::ChunkNotPlayable { index: chunk.index })?;

        let raw = format!("{}/api/studio/audio/{}", self.base_url, audio_path);
        Url::parse(&raw).map_err(|e| StudioClientError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}
