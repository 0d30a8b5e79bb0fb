//! # Application Configuration
//!
//! This module defines the configuration structure for the `sermon-meta-server`
//! and the logic for loading it from programmatic defaults, an optional
//! `config.yml` file, and environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use sermon_meta::prompts::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use sermon_meta::providers::ai::anthropic::{DEFAULT_ANTHROPIC_VERSION, DEFAULT_API_URL};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    pub port: u16,
    /// The upstream generative-text provider.
    pub provider: ProviderConfig,
}

/// Settings for the Anthropic Messages API.
#[derive(Deserialize, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    /// Falls back to the `ANTHROPIC_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub anthropic_version: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("provider", &self.provider)
            .finish()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("anthropic_version", &self.anthropic_version)
            .finish()
    }
}

// Reads a file and substitutes `${VAR}` references with environment values.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration.
///
/// Layers, lowest precedence first:
/// - programmatic defaults (port 3001, Anthropic endpoint, model, 1500 tokens);
/// - `config.yml` next to the server manifest, or `config_path_override`, which
///   must then exist;
/// - `PORT` and other top-level keys from the environment;
/// - `SERMON_META_...` variables for nested keys (e.g. `SERMON_META_PROVIDER__MODEL`);
/// - `ANTHROPIC_API_KEY`, when no key was configured by the layers above.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        .set_default("port", 3001)?
        .set_default("provider.api_url", DEFAULT_API_URL)?
        .set_default("provider.model", DEFAULT_MODEL)?
        .set_default("provider.max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
        .set_default("provider.anthropic_version", DEFAULT_ANTHROPIC_VERSION)?;

    let config_path = match config_path_override {
        Some(path) => {
            if !std::path::Path::new(path).exists() {
                return Err(ConfigError::NotFound(format!(
                    "Config file not found at '{path}'."
                )));
            }
            path.to_string()
        }
        None => format!("{}/config.yml", env!("CARGO_MANIFEST_DIR")),
    };

    if let Some(content) = read_and_substitute(&config_path)? {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("SERMON_META")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    let key_is_unset = config
        .provider
        .api_key
        .as_deref()
        .map(str::is_empty)
        .unwrap_or(true);
    if key_is_unset {
        config.provider.api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
    }

    Ok(config)
}
