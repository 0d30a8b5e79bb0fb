use async_trait::async_trait;
use serde_json::{json, Value};
use sermon_meta::errors::MetadataError;
use sermon_meta::providers::ai::AiProvider;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A scripted provider reply.
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    Upstream { status: u16, message: String },
}

/// An `AiProvider` that replays scripted replies and records every prompt.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a raw reply text for the next call.
    pub fn add_response(&self, response: &str) {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Text(response.to_string()));
    }

    /// Queues an upstream failure for the next call.
    pub fn add_upstream_error(&self, status: u16, message: &str) {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Upstream {
            status,
            message: message.to_string(),
        });
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, MetadataError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Upstream { status, message }) => {
                Err(MetadataError::Upstream { status, message })
            }
            None => Err(MetadataError::EmptyReply),
        }
    }
}

// --- Fixtures ---

/// A well-formed metadata object as the model would return it.
pub fn grace_metadata() -> Value {
    json!({
        "title": "Grace That Changes Everything",
        "description": "In this short message we explore grace.\n\nWe see how grace meets us where we are.",
        "tags": ["grace", "sermon", "faith", "christianity", "church", "bible", "gospel", "hope"],
        "summary": "Grace is an unearned gift that transforms how we live."
    })
}

/// Wraps reply text in an Anthropic Messages API success envelope.
pub fn messages_envelope(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 120, "output_tokens": 200}
    })
}
