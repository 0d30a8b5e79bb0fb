use thiserror::Error;

/// Custom error types for the metadata pipeline.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Transcription is required")]
    Validation,
    #[error("API error: {message}")]
    Upstream { status: u16, message: String },
    #[error("Failed to parse AI response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("AI response did not contain any text content")]
    EmptyReply,
    #[error("Failed to reach the AI provider: {0}")]
    Transport(reqwest::Error),
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Invalid API key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// The coarse classification of a `MetadataError`, as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Upstream,
    Parse,
    Transport,
    Internal,
}

impl MetadataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetadataError::Validation => ErrorKind::Validation,
            MetadataError::Upstream { .. } => ErrorKind::Upstream,
            MetadataError::Parse(_) | MetadataError::EmptyReply => ErrorKind::Parse,
            MetadataError::Transport(_) => ErrorKind::Transport,
            MetadataError::ClientBuild(_)
            | MetadataError::InvalidApiKey(_)
            | MetadataError::Regex(_) => ErrorKind::Internal,
        }
    }
}
