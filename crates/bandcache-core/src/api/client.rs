//! API client for the upstream band directory.
//!
//! This module provides the `ApiClient` struct with one typed fetcher per
//! upstream resource and the generic `get_json` helper they share.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{Artist, DateRecord, IndexEnvelope, LocationRecord, RelationRecord};

use super::{ApiError, Resource};

// ============================================================================
// Constants
// ============================================================================

/// Public base URL of the upstream API
pub const DEFAULT_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// HTTP request timeout in seconds.
/// Startup blocks on these calls, so a hung upstream should fail rather than wait forever.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the upstream directory.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the public upstream with the default timeout
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an upstream resource
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(url: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(url, status, &body))
        }
    }

    /// GET `url` once and decode the body as `T`.
    ///
    /// The raw body is logged when it does not decode, since upstream shape
    /// changes are otherwise hard to diagnose from the serde error alone.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = Self::check_response(url, response).await?;
        let body = response.text().await.map_err(transport)?;

        serde_json::from_str(&body).map_err(|source| {
            warn!(
                url = url,
                body = %ApiError::truncate_body(&body),
                "Raw response that failed to decode"
            );
            ApiError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }

    async fn get_index<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        let url = self.url_for(resource);
        let envelope: IndexEnvelope<T> = self.get_json(&url).await?;
        debug!(resource = %resource, count = envelope.index.len(), "Fetched index");
        Ok(envelope.into_inner())
    }

    // ===== Data Fetching Methods =====

    /// Fetch all artists (bare JSON array)
    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, ApiError> {
        let url = self.url_for(Resource::Artists);
        let artists: Vec<Artist> = self.get_json(&url).await?;
        debug!(count = artists.len(), "Fetched artists");
        Ok(artists)
    }

    /// Fetch venue lists for every artist
    pub async fn fetch_locations(&self) -> Result<Vec<LocationRecord>, ApiError> {
        self.get_index(Resource::Locations).await
    }

    /// Fetch concert date lists for every artist
    pub async fn fetch_dates(&self) -> Result<Vec<DateRecord>, ApiError> {
        self.get_index(Resource::Dates).await
    }

    /// Fetch venue -> dates mappings for every artist
    pub async fn fetch_relations(&self) -> Result<Vec<RelationRecord>, ApiError> {
        self.get_index(Resource::Relations).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, UpstreamFixture};

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:9/api/", Duration::from_secs(1))
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:9/api");
        assert_eq!(client.url_for(Resource::Artists), "http://localhost:9/api/artists");
        assert_eq!(client.url_for(Resource::Relations), "http://localhost:9/api/relation");
    }

    #[tokio::test]
    async fn test_fetch_all_resources() {
        let base = spawn_upstream(UpstreamFixture::default()).await;
        let client = ApiClient::with_base_url(base, Duration::from_secs(5)).unwrap();

        let artists = client.fetch_artists().await.unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].name, "Queen");

        let locations = client.fetch_locations().await.unwrap();
        assert_eq!(locations.len(), 2);

        let dates = client.fetch_dates().await.unwrap();
        assert_eq!(dates[1].id, 2);

        let relations = client.fetch_relations().await.unwrap();
        assert_eq!(relations[0].concert_count(), 3);
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let fixture = UpstreamFixture::default().failing(Resource::Dates, 500);
        let base = spawn_upstream(fixture).await;
        let client = ApiClient::with_base_url(base, Duration::from_secs(5)).unwrap();

        match client.fetch_dates().await {
            Err(ApiError::Status { status, url, .. }) => {
                assert_eq!(status.as_u16(), 500);
                assert!(url.ends_with("/dates"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let fixture = UpstreamFixture::default().malformed(Resource::Locations);
        let base = spawn_upstream(fixture).await;
        let client = ApiClient::with_base_url(base, Duration::from_secs(5)).unwrap();

        let err = client.fetch_locations().await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_envelope_required_for_index_resources() {
        // A bare array where an envelope is expected does not decode
        let fixture = UpstreamFixture::default().raw(Resource::Relations, r#"[{"id":1}]"#);
        let base = spawn_upstream(fixture).await;
        let client = ApiClient::with_base_url(base, Duration::from_secs(5)).unwrap();

        assert!(client.fetch_relations().await.unwrap_err().is_decode());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            ApiClient::with_base_url(format!("http://{}/api", addr), Duration::from_secs(2)).unwrap();
        let err = client.fetch_artists().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
