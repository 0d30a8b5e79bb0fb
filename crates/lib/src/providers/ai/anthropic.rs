use crate::{
    errors::MetadataError,
    normalize,
    prompts::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL},
    providers::ai::AiProvider,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client as ReqwestClient,
};
use serde::Serialize;
use std::fmt::{self, Debug};
use tracing::{debug, info};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

// --- Anthropic-specific request structures ---

#[derive(Serialize, Debug)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

// --- Anthropic Provider implementation ---

/// A provider for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    anthropic_version: String,
}

impl Debug for AnthropicProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl AnthropicProvider {
    /// Creates a new `AnthropicProvider` with the default model and token budget.
    pub fn new(api_url: String, api_key: String) -> Result<Self, MetadataError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(MetadataError::ClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_anthropic_version(mut self, version: impl Into<String>) -> Self {
        self.anthropic_version = version.into();
        self
    }

    fn build_headers(&self) -> Result<HeaderMap, MetadataError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&self.anthropic_version)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn generate(&self, prompt: &str) -> Result<String, MetadataError> {
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        info!(model = %self.model, "Sending metadata request to Anthropic");
        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(MetadataError::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(MetadataError::Transport)?;
        debug!(status, body_len = body.len(), "Received Anthropic response");

        normalize::reply_text(status, &body)
    }
}
