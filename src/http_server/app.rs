use std::sync::Arc;

use axum::{
    Json, Router,
    response::Html,
    routing::{get, post},
};
use color_eyre::eyre::{Context, eyre};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::config::{Config, OutputMode};
use crate::gemini::{CandidateFormat, GeminiClient, GeminiSuggestionGenerator};
use crate::http_server::{routes, state::AppState};
use crate::spotify::{SpotifyApiCredentials, SpotifyClient};
use crate::suggest::SuggestService;

const INDEX_HTML: &str = include_str!("ui/index.html");

pub struct HttpServerConfig {
    pub port: u16,
    pub output_mode: OutputMode,
    pub suggestion_count: usize,
    pub gemini_model: String,
    pub candidate_format: CandidateFormat,
    pub config: Config,
}

async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the shared state. A missing secret leaves the service slot holding
/// the configuration error; the server starts anyway and every suggestion
/// request answers with it.
pub fn build_state(server_config: &HttpServerConfig) -> Arc<AppState> {
    let service = server_config.config.credentials().map(|credentials| {
        let generator = GeminiSuggestionGenerator::new(
            GeminiClient::new(
                credentials.gemini_api_key,
                server_config.gemini_model.clone(),
            ),
            server_config.candidate_format,
        );
        let catalog = SpotifyClient::new(SpotifyApiCredentials::new(
            credentials.spotify_client_id,
            credentials.spotify_client_secret,
        ));
        Arc::new(SuggestService::new(
            Arc::new(generator),
            Arc::new(catalog),
            server_config.suggestion_count,
        ))
    });

    if let Err(err) = &service {
        tracing::warn!("{err}; /api/suggestions will answer with a configuration error");
    }

    Arc::new(AppState {
        service,
        output_mode: server_config.output_mode,
    })
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::permissive();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/api/suggestions",
            post(routes::suggestions::create_suggestions),
        )
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

pub async fn start(server_config: HttpServerConfig) -> color_eyre::Result<()> {
    let state = build_state(&server_config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server_config.port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", server_config.port))?;
    tracing::info!("Listening on 0.0.0.0:{}", server_config.port);
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
