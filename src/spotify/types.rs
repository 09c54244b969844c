use serde::Deserialize;

use crate::ports::catalog::ResolvedTrack;

/// Token response for the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Search response envelope; only the track block is requested.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub items: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
    #[serde(default)]
    pub external_urls: SpotifyExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyExternalUrls {
    pub spotify: Option<String>,
}

impl From<SpotifyTrack> for ResolvedTrack {
    fn from(track: SpotifyTrack) -> Self {
        let url = track
            .external_urls
            .spotify
            .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", track.id));

        ResolvedTrack {
            name: track.name,
            artists: track.artists.into_iter().map(|artist| artist.name).collect(),
            album: track.album.name,
            // The API orders images largest first
            image_url: track.album.images.into_iter().next().map(|image| image.url),
            url,
            uri: track.uri,
            id: track.id,
        }
    }
}
