use std::time::{Duration, Instant};

use reqwest::StatusCode;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::ports::catalog::{CatalogError, CatalogSearcher, ResolvedTrack};
use crate::spotify::auth::{TokenError, request_client_credentials_token};
use crate::spotify::types::{SearchResponse, SpotifyTrack};

pub const SPOTIFY_SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Tokens are renewed this long before their advertised expiry.
const TOKEN_EXPIRY_SLACK: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to send search request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("search request failed with status {status}: {body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("failed to parse search response: {0}")]
    FailedToParseResponse(reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SpotifyApiCredentials {
    client_id: String,
    client_secret: String,
}

impl SpotifyApiCredentials {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn new(access_token: String, expires_in: Duration) -> Self {
        Self {
            access_token,
            expires_at: Instant::now() + expires_in.saturating_sub(TOKEN_EXPIRY_SLACK),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Spotify API client holding credential state explicitly; the bearer token
/// is fetched on first use and refreshed when it expires.
pub struct SpotifyClient {
    credentials: SpotifyApiCredentials,
    client: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl SpotifyClient {
    pub fn new(credentials: SpotifyApiCredentials) -> Self {
        Self {
            credentials,
            client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    /// Bearer token for the next call, exchanging credentials when no valid
    /// token is cached.
    async fn access_token(&self) -> Result<String, TokenError> {
        let mut slot = self.token.lock().await;

        if let Some(cached) = slot.as_ref() {
            if !cached.is_expired() {
                return Ok(cached.access_token.clone());
            }
            tracing::debug!("Catalog token expired, requesting a new one");
        }

        let response = request_client_credentials_token(
            &self.client,
            self.credentials.client_id(),
            self.credentials.client_secret(),
        )
        .await?;

        let cached = CachedToken::new(
            response.access_token,
            Duration::from_secs(response.expires_in),
        );
        let access_token = cached.access_token.clone();
        *slot = Some(cached);

        Ok(access_token)
    }

    /// Top-1 track search by free-text keywords.
    pub async fn search_track(
        &self,
        access_token: &str,
        query: &str,
    ) -> Result<Option<SpotifyTrack>, SearchError> {
        let response = self
            .client
            .get(SPOTIFY_SEARCH_URL)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .bearer_auth(access_token)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(SearchError::FailedToSendRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error text".to_string());
            return Err(SearchError::BadStatus { status, body });
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(SearchError::FailedToParseResponse)?;

        Ok(results.tracks.items.into_iter().next())
    }
}

#[async_trait::async_trait]
impl CatalogSearcher for SpotifyClient {
    async fn find_track(&self, query: &str) -> Result<Option<ResolvedTrack>, CatalogError> {
        let access_token = self
            .access_token()
            .await
            .map_err(|err| CatalogError::Authentication(err.to_string()))?;

        let hit = self
            .search_track(&access_token, query)
            .await
            .map_err(|err| CatalogError::Search(err.to_string()))?;

        Ok(hit.map(ResolvedTrack::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_not_expired() {
        let token = CachedToken::new("token".to_string(), Duration::from_secs(3600));
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expiry_includes_slack() {
        // Advertised lifetime shorter than the slack: renew immediately.
        let token = CachedToken::new("token".to_string(), Duration::from_secs(30));
        assert!(token.is_expired());

        let token = CachedToken::new("token".to_string(), Duration::from_secs(61));
        assert!(!token.is_expired());
    }
}
