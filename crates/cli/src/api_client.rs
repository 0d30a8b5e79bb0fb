//! # API Client
//!
//! This module provides a client for the `sermon-meta-server` metadata endpoint.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use sermon_meta::GenerationResult;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// The `{ "error": ... }` body every failed server response carries.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<String>,
}

/// The client for making API calls to the `sermon-meta-server`.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Requests metadata for a transcription from `POST /api/generate-metadata`.
    pub async fn generate_metadata(&self, transcription: &str) -> Result<GenerationResult, ApiError> {
        let url = format!("{}/api/generate-metadata", self.base_url);
        info!("Requesting metadata from: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "transcription": transcription }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Failed to generate metadata".to_string());
            return Err(ApiError::Server { status, message });
        }

        Ok(response.json().await?)
    }
}
