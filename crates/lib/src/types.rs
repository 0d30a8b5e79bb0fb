//! # Core Data Types
//!
//! The transient entities that flow through a single metadata generation call.
//! None of them are persisted.

use serde::{Deserialize, Serialize};

/// The inbound request: the raw sermon transcription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Missing and empty transcriptions are both rejected by validation.
    #[serde(default)]
    pub transcription: Option<String>,
}

impl GenerationRequest {
    pub fn new(transcription: impl Into<String>) -> Self {
        Self {
            transcription: Some(transcription.into()),
        }
    }
}

/// The generated YouTube metadata bundle.
///
/// The model is asked for a title under 60 characters and 8-10 tags, but those
/// are targets only. Parsing requires the four fields with the right JSON types
/// and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerationResult {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub summary: String,
}

/// The lifecycle of one generation call, owned by the caller.
///
/// `Idle -> Requesting -> Succeeded | Failed`. Both outcomes are terminal; a new
/// attempt starts from a fresh (or `reset`) lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationLifecycle {
    #[default]
    Idle,
    Requesting,
    Succeeded(GenerationResult),
    Failed(String),
}

impl GenerationLifecycle {
    /// Moves `Idle` to `Requesting`. Returns `false` from any other state, so a
    /// second trigger while a call is outstanding is refused.
    pub fn begin(&mut self) -> bool {
        if matches!(self, GenerationLifecycle::Idle) {
            *self = GenerationLifecycle::Requesting;
            true
        } else {
            false
        }
    }

    /// Records the outcome of the in-flight call. Ignored unless `Requesting`.
    pub fn complete<E: std::fmt::Display>(&mut self, outcome: Result<GenerationResult, E>) {
        if !self.is_in_flight() {
            return;
        }
        *self = match outcome {
            Ok(result) => GenerationLifecycle::Succeeded(result),
            Err(e) => GenerationLifecycle::Failed(e.to_string()),
        };
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, GenerationLifecycle::Requesting)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationLifecycle::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = GenerationLifecycle::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationResult {
        GenerationResult {
            title: "Grace".to_string(),
            description: "About grace.".to_string(),
            tags: vec!["grace".to_string()],
            summary: "Grace is given.".to_string(),
        }
    }

    #[test]
    fn test_lifecycle_refuses_second_trigger() {
        let mut lifecycle = GenerationLifecycle::default();
        assert!(lifecycle.begin());
        assert!(lifecycle.is_in_flight());
        assert!(!lifecycle.begin());
    }

    #[test]
    fn test_lifecycle_outcomes_are_terminal() {
        let mut lifecycle = GenerationLifecycle::default();
        lifecycle.begin();
        lifecycle.complete::<String>(Ok(sample()));
        assert_eq!(lifecycle.result(), Some(&sample()));

        lifecycle.complete::<String>(Err("late failure".to_string()));
        assert_eq!(lifecycle.result(), Some(&sample()));
        assert!(!lifecycle.begin());

        lifecycle.reset();
        assert!(lifecycle.begin());
        lifecycle.complete::<String>(Err("rate limited".to_string()));
        assert_eq!(
            lifecycle,
            GenerationLifecycle::Failed("rate limited".to_string())
        );
    }

    #[test]
    fn test_result_rejects_unknown_fields() {
        let raw = r#"{"title":"t","description":"d","tags":[],"summary":"s","extra":1}"#;
        assert!(serde_json::from_str::<GenerationResult>(raw).is_err());
    }
}
