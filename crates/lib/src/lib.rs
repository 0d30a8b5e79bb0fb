//! # Sermon Metadata Generation
//!
//! This crate turns a short sermon transcription into YouTube metadata (title,
//! description, tags and summary) with a single call to a generative-text provider,
//! and normalizes the provider's reply into a typed `GenerationResult`.

pub mod errors;
pub mod export;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::{ErrorKind, MetadataError};
pub use types::{GenerationLifecycle, GenerationRequest, GenerationResult};

use providers::ai::AiProvider;
use tracing::{info, warn};

const MAX_PREVIEW_CHARS: usize = 80;

/// A client that runs the metadata generation pipeline against an `AiProvider`.
#[derive(Clone, Debug)]
pub struct MetadataClient {
    ai_provider: Box<dyn AiProvider>,
}

impl MetadataClient {
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Generates metadata for a transcription.
    ///
    /// Empty or whitespace-only input fails with `MetadataError::Validation`
    /// without touching the provider. Otherwise exactly one provider call is made
    /// and its reply is parsed by [`normalize::parse_metadata`].
    pub async fn generate_metadata(
        &self,
        transcription: &str,
    ) -> Result<GenerationResult, MetadataError> {
        if transcription.trim().is_empty() {
            warn!("Rejected metadata request with empty transcription");
            return Err(MetadataError::Validation);
        }

        info!(
            transcription = %preview(transcription),
            chars = transcription.chars().count(),
            "Generating sermon metadata"
        );
        let prompt = prompts::build_metadata_prompt(transcription);
        let reply = self.ai_provider.generate(&prompt).await?;
        normalize::parse_metadata(&reply)
    }

    /// Same as `generate_metadata`, for a deserialized request body.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, MetadataError> {
        match request.transcription.as_deref() {
            Some(transcription) => self.generate_metadata(transcription).await,
            None => Err(MetadataError::Validation),
        }
    }
}

/// A short, single-line preview of a transcription for log lines.
pub fn preview(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() > MAX_PREVIEW_CHARS {
        let head: String = flattened.chars().take(MAX_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        flattened
    }
}
