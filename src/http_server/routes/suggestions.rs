use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::config::OutputMode;
use crate::http_server::error::ApiError;
use crate::http_server::state::AppState;
use crate::ports::catalog::ResolvedTrack;

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Wire shape of one resolved track in `tracks` mode.
#[derive(Debug, Serialize)]
pub struct TrackResult {
    pub name: String,
    pub artist: String,
    pub album: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub url: String,
    pub uri: String,
}

impl From<ResolvedTrack> for TrackResult {
    fn from(track: ResolvedTrack) -> Self {
        Self {
            name: track.name,
            artist: track.artists.join(", "),
            album: track.album,
            image_url: track.image_url,
            url: track.url,
            uri: track.uri,
        }
    }
}

/// The three configured response shapes for a successful request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuggestionResponse {
    Text {
        text: String,
    },
    Tracks {
        results: Vec<TrackResult>,
    },
    TrackIds {
        #[serde(rename = "trackIds")]
        track_ids: Vec<String>,
    },
}

/// POST /api/suggestions
///
/// Validates the prompt and the configured secrets before any outbound call,
/// then runs the generate-and-resolve pipeline.
pub async fn create_suggestions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest("Prompt is required".to_string()));
    }

    let service = state
        .service
        .as_ref()
        .map_err(|err| ApiError::Config(err.clone()))?;

    let tracks = service.suggest(prompt).await?;

    Ok(Json(shape_response(state.output_mode, tracks)))
}

fn shape_response(mode: OutputMode, tracks: Vec<ResolvedTrack>) -> SuggestionResponse {
    match mode {
        OutputMode::Text => SuggestionResponse::Text {
            text: format_display_text(&tracks),
        },
        OutputMode::Tracks => SuggestionResponse::Tracks {
            results: tracks.into_iter().map(TrackResult::from).collect(),
        },
        OutputMode::TrackIds => SuggestionResponse::TrackIds {
            track_ids: tracks.into_iter().map(|track| track.id).collect(),
        },
    }
}

/// Plain-text rendering of the result list. The server never composes HTML;
/// the page owns presentation.
fn format_display_text(tracks: &[ResolvedTrack]) -> String {
    if tracks.is_empty() {
        return "No matching tracks found.".to_string();
    }

    let mut text = String::new();
    for (index, track) in tracks.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} by {} [{}]\n   {}\n",
            index + 1,
            track.name,
            track.artists.join(", "),
            track.album,
            track.url
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<ResolvedTrack> {
        vec![
            ResolvedTrack {
                id: "1a".to_string(),
                name: "Song A".to_string(),
                artists: vec!["Artist A".to_string(), "Artist B".to_string()],
                album: "Album A".to_string(),
                image_url: Some("https://i.scdn.co/image/a".to_string()),
                url: "https://open.spotify.com/track/1a".to_string(),
                uri: "spotify:track:1a".to_string(),
            },
            ResolvedTrack {
                id: "2b".to_string(),
                name: "Song B".to_string(),
                artists: vec!["Artist C".to_string()],
                album: "Album B".to_string(),
                image_url: None,
                url: "https://open.spotify.com/track/2b".to_string(),
                uri: "spotify:track:2b".to_string(),
            },
        ]
    }

    #[test]
    fn test_tracks_mode_wire_shape() {
        let response = shape_response(OutputMode::Tracks, tracks());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["results"][0]["name"], "Song A");
        assert_eq!(json["results"][0]["artist"], "Artist A, Artist B");
        assert_eq!(json["results"][0]["imageUrl"], "https://i.scdn.co/image/a");
        assert_eq!(json["results"][1]["album"], "Album B");
        assert_eq!(json["results"][1]["uri"], "spotify:track:2b");
    }

    #[test]
    fn test_track_ids_mode_wire_shape() {
        let response = shape_response(OutputMode::TrackIds, tracks());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["trackIds"][0], "1a");
        assert_eq!(json["trackIds"][1], "2b");
        assert!(json.get("results").is_none());
    }

    #[test]
    fn test_text_mode_lists_every_track_in_order() {
        let response = shape_response(OutputMode::Text, tracks());
        let json = serde_json::to_value(&response).unwrap();
        let text = json["text"].as_str().unwrap();

        assert!(text.contains("1. Song A by Artist A, Artist B [Album A]"));
        assert!(text.contains("2. Song B by Artist C [Album B]"));
        assert!(text.find("Song A").unwrap() < text.find("Song B").unwrap());
    }

    #[test]
    fn test_text_mode_empty_results() {
        let response = shape_response(OutputMode::Text, vec![]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["text"], "No matching tracks found.");
    }
}
