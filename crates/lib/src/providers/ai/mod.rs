pub mod anthropic;

use crate::errors::MetadataError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a generative-text provider.
///
/// Implementations issue exactly one request per call and return the model's raw
/// reply text, or a classified `MetadataError`.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends `prompt` as the sole user message and returns the reply text.
    async fn generate(&self, prompt: &str) -> Result<String, MetadataError>;
}

dyn_clone::clone_trait_object!(AiProvider);
