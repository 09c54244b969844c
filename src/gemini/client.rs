use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("failed to send generation request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("generation request failed with status {status}: {body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("failed to parse generation response: {0}")]
    FailedToParseResponse(reqwest::Error),
    #[error("generation response contained no text")]
    EmptyResponse,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    /// Send `prompt` and return the first text payload of the completion.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE_URL, self.model);

        let response = self
            .client
            .post(&url)
            // The API authenticates via a key query parameter
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .map_err(GeminiError::FailedToSendRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error text".to_string());
            return Err(GeminiError::BadStatus { status, body });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(GeminiError::FailedToParseResponse)?;

        envelope.into_text().ok_or(GeminiError::EmptyResponse)
    }
}
