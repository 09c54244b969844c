use clap::ValueEnum;
use thiserror::Error;

/// Environment variable holding the generative-text service key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable holding the catalog client id.
pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the catalog client secret.
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not configured on the server")]
    MissingSecret(&'static str),
}

/// Shape of the `/api/suggestions` response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// `{"text": ...}` with a plain-text rendering of the result list
    Text,
    /// `{"results": [...]}` with full track metadata
    Tracks,
    /// `{"trackIds": [...]}` with bare catalog ids
    TrackIds,
}

/// Secrets read from the process environment.
///
/// Missing values are kept as `None` so the server can start anyway and
/// answer requests with a configuration error instead of crashing.
#[derive(Debug, Clone, Default)]
pub struct Config {
    gemini_api_key: Option<String>,
    spotify_client_id: Option<String>,
    spotify_client_secret: Option<String>,
}

/// The full secret set, available once every variable is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name| lookup(name).filter(|value: &String| !value.trim().is_empty());
        Self {
            gemini_api_key: get(GEMINI_API_KEY),
            spotify_client_id: get(SPOTIFY_CLIENT_ID),
            spotify_client_secret: get(SPOTIFY_CLIENT_SECRET),
        }
    }

    /// The secrets, or the first missing variable by name.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let gemini_api_key = self
            .gemini_api_key
            .clone()
            .ok_or(ConfigError::MissingSecret(GEMINI_API_KEY))?;
        let spotify_client_id = self
            .spotify_client_id
            .clone()
            .ok_or(ConfigError::MissingSecret(SPOTIFY_CLIENT_ID))?;
        let spotify_client_secret = self
            .spotify_client_secret
            .clone()
            .ok_or(ConfigError::MissingSecret(SPOTIFY_CLIENT_SECRET))?;

        Ok(Credentials {
            gemini_api_key,
            spotify_client_id,
            spotify_client_secret,
        })
    }
}
