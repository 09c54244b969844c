use thiserror::Error;

/// Decoupled representation of a catalog track, built from whatever the
/// search API returned for a candidate.
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub image_url: Option<String>,
    pub url: String,
    pub uri: String,
}

/// The two failure kinds the resolution loop distinguishes: authentication
/// problems abort the whole request, search problems only cost the one
/// candidate.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to authenticate with the music catalog: {0}")]
    Authentication(String),
    #[error("catalog search failed: {0}")]
    Search(String),
}

/// Port trait wrapping the catalog search capability used by the suggestion
/// flow.
///
/// Implementations live in `spotify::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSearcher: Send + Sync {
    /// Top-1 keyword search. `Ok(None)` means the catalog had no hit for this
    /// candidate.
    async fn find_track(&self, query: &str) -> Result<Option<ResolvedTrack>, CatalogError>;
}
