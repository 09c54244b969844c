use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::spotify::types::SpotifyTokenResponse;

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid catalog credentials: {reason}")]
    InvalidCredentials { reason: String },
    #[error("failed to send token request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("failed to parse token response: {0}")]
    FailedToParseResponse(reqwest::Error),
}

/// Exchange the client id/secret pair for a short-lived bearer token
/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
pub async fn request_client_credentials_token(
    client: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
) -> Result<SpotifyTokenResponse, TokenError> {
    let mut params = HashMap::new();
    params.insert("grant_type", "client_credentials");

    let response = client
        .post(SPOTIFY_TOKEN_URL)
        // This automatically serializes to x-www-form-urlencoded and sets the header (as required by spotify)
        .form(&params)
        .basic_auth(client_id, Some(client_secret))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .map_err(TokenError::FailedToSendRequest)?;

    if !response.status().is_success() {
        return Err(TokenError::InvalidCredentials {
            reason: response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error text".to_string()),
        });
    }

    response
        .json()
        .await
        .map_err(TokenError::FailedToParseResponse)
}
