use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::config::ConfigError;

/// Uniform error payload for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request failures, converted once at the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// Client-side problem with the request itself
    BadRequest(String),
    /// A required secret is missing from the environment
    Config(ConfigError),
    /// Generation or resolution failed upstream
    Internal(color_eyre::Report),
}

impl From<color_eyre::Report> for ApiError {
    fn from(report: color_eyre::Report) -> Self {
        Self::Internal(report)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Config(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            // {report:#} keeps the whole cause chain visible to the caller;
            // this is an internal tool, not a hardened public service
            ApiError::Internal(report) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{report:#}")),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {message}");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn test_status_codes() {
        let response = ApiError::BadRequest("Prompt is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            ApiError::Config(ConfigError::MissingSecret(config::GEMINI_API_KEY)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            ApiError::Internal(color_eyre::eyre::eyre!("upstream exploded")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
