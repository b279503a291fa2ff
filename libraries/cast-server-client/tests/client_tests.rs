//! Tests for the Cast Studio backend client.
//!
//! These tests use a mock server to verify client behavior without
//! requiring a real backend.

use cast_core::types::{EpisodeId, EpisodeStatus, ResumePoint};
use cast_server_client::{ClientConfig, StudioClient, StudioClientError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StudioClient {
    StudioClient::new(ClientConfig::new(server.uri())).expect("valid mock url")
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_urls_accepted() {
        assert!(StudioClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(StudioClient::new(ClientConfig::new("http://localhost:5000")).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = StudioClient::new(ClientConfig::new(""));
        match result {
            Err(StudioClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = StudioClient::new(ClientConfig::new("example.com"));
        assert!(matches!(result, Err(StudioClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let client = StudioClient::new(ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.url(), "http://localhost:5000");
    }
}

// =============================================================================
// Health Tests
// =============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_healthy_backend() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "model_loaded": true,
                "sample_rate": 24000,
            })))
            .mount(&server)
            .await;

        let health = client_for(&server).health().await.unwrap();
        assert!(health.is_healthy());
        assert!(health.model_loaded);
        assert_eq!(health.sample_rate, Some(24000));
    }

    #[tokio::test]
    async fn test_unhealthy_backend_still_parses() {
        // The backend reports 503 while the model is loading; that is a
        // valid health payload, not a client error.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "status": "unhealthy",
                "model_loaded": false,
                "sample_rate": null,
            })))
            .mount(&server)
            .await;

        let health = client_for(&server).health().await.unwrap();
        assert!(!health.is_healthy());
        assert!(!health.model_loaded);
    }
}

// =============================================================================
// Episode Tests
// =============================================================================

mod episodes {
    use super::*;

    fn episode_body() -> serde_json::Value {
        json!({
            "id": "ep-1",
            "title": "Chapter One",
            "status": "ready",
            "total_duration_secs": 180.0,
            "chunks": [
                {
                    "id": "ch-0",
                    "index": 0,
                    "text": "First sentence.",
                    "audio_path": "ep-1/0.wav",
                    "duration_secs": 100.0,
                    "status": "ready",
                    "error_message": null,
                },
                {
                    "id": "ch-1",
                    "index": 1,
                    "text": "Second sentence.",
                    "audio_path": null,
                    "duration_secs": null,
                    "status": "pending",
                    "error_message": null,
                },
            ],
            "resume": {
                "chunk_index": 0,
                "position_secs": 42.5,
                "percent_listened": 23.6,
            },
        })
    }

    #[tokio::test]
    async fn test_list_episodes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "ep-1",
                    "source_id": "src-1",
                    "title": "Chapter One",
                    "voice_id": "alba",
                    "output_format": "wav",
                    "status": "ready",
                    "total_duration_secs": 180.0,
                    "created_at": "2026-07-01T12:00:00Z",
                    "updated_at": "2026-07-01T12:05:00Z",
                },
                {
                    "id": "ep-2",
                    "source_id": "src-1",
                    "title": "Chapter Two",
                    "voice_id": "alba",
                    "output_format": "wav",
                    "status": "generating",
                    "total_duration_secs": null,
                    "created_at": "2026-07-02T09:00:00Z",
                    "updated_at": "2026-07-02T09:00:00Z",
                },
            ])))
            .mount(&server)
            .await;

        let episodes = client_for(&server).episodes().list().await.unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "Chapter One");
        assert_eq!(episodes[0].status, EpisodeStatus::Ready);
        assert_eq!(episodes[1].status, EpisodeStatus::Generating);
        assert!(episodes[1].total_duration_secs.is_none());
    }

    #[tokio::test]
    async fn test_get_episode_parses_chunks_and_resume() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/ep-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episode_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let episode = client
            .episodes()
            .get(&EpisodeId::new("ep-1"))
            .await
            .unwrap();

        assert_eq!(episode.title, "Chapter One");
        assert_eq!(episode.chunks.len(), 2);
        assert!(episode.chunks[0].is_playable());
        assert!(!episode.chunks[1].is_playable());

        let resume = episode.resume.unwrap();
        assert_eq!(resume.chunk_index, 0);
        assert_eq!(resume.position_secs, 42.5);
    }

    #[tokio::test]
    async fn test_missing_episode_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .episodes()
            .get(&EpisodeId::new("missing"))
            .await;

        assert!(matches!(result, Err(StudioClientError::EpisodeNotFound(_))));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/ep-1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db exploded"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .episodes()
            .get(&EpisodeId::new("ep-1"))
            .await;

        match result {
            Err(StudioClientError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "db exploded");
            }
            _ => panic!("Expected ServerError"),
        }
    }

    #[tokio::test]
    async fn test_chunk_audio_url_resolution() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/ep-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episode_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let episode = client
            .episodes()
            .get(&EpisodeId::new("ep-1"))
            .await
            .unwrap();

        let url = client
            .episodes()
            .chunk_audio_url(&episode.chunks[0])
            .unwrap();
        assert_eq!(url.path(), "/api/studio/audio/ep-1/0.wav");

        // The pending chunk has no audio yet.
        let result = client.episodes().chunk_audio_url(&episode.chunks[1]);
        assert!(matches!(
            result,
            Err(StudioClientError::ChunkNotPlayable { index: 1 })
        ));
    }
}

// =============================================================================
// Playback Position Tests
// =============================================================================

mod playback_position {
    use super::*;
    use wiremock::matchers::body_partial_json;

    #[tokio::test]
    async fn test_save_position_puts_payload() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/studio/episodes/ep-1/playback"))
            .and(body_partial_json(json!({
                "chunk_index": 2,
                "position_secs": 15.0,
                "percent_listened": 87.5,
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .playback()
            .save_position(&EpisodeId::new("ep-1"), &ResumePoint::new(2, 15.0, 87.5))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_save_stamps_last_played_at() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/studio/episodes/ep-1/playback"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .playback()
            .save_position(&EpisodeId::new("ep-1"), &ResumePoint::new(0, 1.0, 0.5))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("last_played_at").is_some());
    }

    #[tokio::test]
    async fn test_best_effort_save_swallows_failures() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/studio/episodes/ep-1/playback"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        // Must not panic or return an error; the next tick retries.
        client_for(&server)
            .playback()
            .save_position_best_effort(&EpisodeId::new("ep-1"), &ResumePoint::new(0, 1.0, 0.5))
            .await;
    }

    #[tokio::test]
    async fn test_get_position_round_trips() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/ep-1/playback"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "chunk_index": 4,
                "position_secs": 9.75,
                "percent_listened": 33.0,
            })))
            .mount(&server)
            .await;

        let resume = client_for(&server)
            .playback()
            .get_position(&EpisodeId::new("ep-1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(resume.chunk_index, 4);
        assert_eq!(resume.position_secs, 9.75);
    }

    #[tokio::test]
    async fn test_no_saved_position_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/studio/episodes/ep-1/playback"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resume = client_for(&server)
            .playback()
            .get_position(&EpisodeId::new("ep-1"))
            .await
            .unwrap();

        assert!(resume.is_none());
    }
}
