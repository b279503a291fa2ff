//! Main Cast Studio backend client.

use crate::episodes::EpisodeClient;
use crate::error::{Result, StudioClientError};
use crate::playback::PlaybackStateClient;
use crate::types::{ClientConfig, HealthResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Cast Studio backend API.
///
/// Provides access to episode fetching and playback-position
/// persistence. The backend is a trusted local/first-party service, so
/// there is no authentication layer.
///
/// # Example
///
/// ```ignore
/// use cast_server_client::{ClientConfig, StudioClient};
///
/// let client = StudioClient::new(ClientConfig::new("http://localhost:5000"))?;
///
/// let health = client.health().await?;
/// println!("backend: {}", health.status);
///
/// let episode = client.episodes().get(&episode_id).await?;
/// println!("{} chunks", episode.chunks.len());
/// ```
pub struct StudioClient {
    http: Client,
    base_url: String,
}

impl StudioClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(StudioClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StudioClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("CastStudio/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StudioClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Probe the backend health endpoint.
    ///
    /// Returns the health payload even when the backend reports itself
    /// unhealthy (HTTP 503); only transport and protocol failures are
    /// errors.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Probing backend health");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                StudioClientError::ServerUnreachable(e.to_string())
            } else {
                StudioClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() || status.as_u16() == 503 {
            let health: HealthResponse = response.json().await.map_err(|e| {
                StudioClientError::ParseError(format!("Failed to parse health response: {}", e))
            })?;

            info!(
                status = %health.status,
                model_loaded = health.model_loaded,
                "Backend health"
            );

            Ok(health)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StudioClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a client for episode operations.
    pub fn episodes(&self) -> EpisodeClient<'_> {
        EpisodeClient::new(&self.http, &self.base_url)
    }

    /// Get a client for playback-position persistence.
    pub fn playback(&self) -> PlaybackStateClient<'_> {
        PlaybackStateClient::new(&self.http, &self.base_url)
    }
}
