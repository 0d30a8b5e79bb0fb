//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is immutable after construction and is
//! shared by every request handler.

use crate::config::AppConfig;
use sermon_meta::{
    providers::ai::{anthropic::AnthropicProvider, AiProvider},
    MetadataClient,
};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The metadata pipeline, wired to the configured provider.
    pub metadata_client: Arc<MetadataClient>,
}

impl AppState {
    /// Builds a state around an already constructed provider.
    pub fn with_provider(config: AppConfig, provider: Box<dyn AiProvider>) -> Self {
        Self {
            config: Arc::new(config),
            metadata_client: Arc::new(MetadataClient::new(provider)),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// Instantiates the Anthropic provider. Fails when no API key is configured.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider_config = &config.provider;
    let api_key = provider_config.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!("An API key is required. Please set ANTHROPIC_API_KEY in your .env file.")
    })?;

    let provider = AnthropicProvider::new(provider_config.api_url.clone(), api_key)?
        .with_model(provider_config.model.clone())
        .with_max_tokens(provider_config.max_tokens)
        .with_anthropic_version(provider_config.anthropic_version.clone());
    tracing::info!(
        api_url = %provider_config.api_url,
        model = %provider_config.model,
        "Initialized Anthropic provider."
    );

    Ok(AppState::with_provider(config, Box::new(provider)))
}
