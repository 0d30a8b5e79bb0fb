//! # Response Normalization
//!
//! Turns the upstream's raw HTTP reply into either a `GenerationResult` or a
//! classified `MetadataError`. Everything here is pure so it can be exercised
//! without a network.

use crate::{errors::MetadataError, types::GenerationResult};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

/// Classifies an upstream reply and extracts the model's text.
///
/// A non-success status becomes `MetadataError::Upstream`, carrying the upstream's
/// `error.message` when the body has one. On success the first text segment of
/// the envelope's `content` array is returned.
pub fn reply_text(status: u16, body: &str) -> Result<String, MetadataError> {
    if !(200..300).contains(&status) {
        error!(status, body = %body, "Anthropic API error");
        let message = serde_json::from_str::<UpstreamErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(MetadataError::Upstream { status, message });
    }

    let envelope: MessagesResponse = serde_json::from_str(body)?;
    envelope
        .content
        .into_iter()
        .find_map(|block| block.text)
        .ok_or(MetadataError::EmptyReply)
}

/// Removes a leading and trailing markdown code fence, labeled or not.
///
/// Text without fences is only trimmed, so applying this twice is the same as
/// applying it once.
pub fn strip_code_fences(text: &str) -> Result<String, MetadataError> {
    let opening = Regex::new(r"^```[A-Za-z0-9_+-]*[ \t]*\r?\n?")?;
    let closing = Regex::new(r"\r?\n?```$")?;

    let trimmed = text.trim();
    let without_opening = opening.replace(trimmed, "");
    let without_closing = closing.replace(without_opening.trim_end(), "");
    Ok(without_closing.trim().to_string())
}

/// Cleans the model's reply and parses it against the metadata schema.
pub fn parse_metadata(raw_reply: &str) -> Result<GenerationResult, MetadataError> {
    let cleaned = strip_code_fences(raw_reply)?;
    debug!(reply_len = cleaned.len(), "Parsing cleaned metadata reply");
    Ok(serde_json::from_str(&cleaned)?)
}

/// The full normalization pipeline for one upstream reply.
pub fn normalize(status: u16, body: &str) -> Result<GenerationResult, MetadataError> {
    let text = reply_text(status, body)?;
    parse_metadata(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    const METADATA: &str = r#"{"title":"Amazing Grace","description":"A sermon on grace.","tags":["grace","faith"],"summary":"Grace is a gift."}"#;

    fn envelope(text: &str) -> String {
        json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
        })
        .to_string()
    }

    #[test]
    fn test_labeled_fence_normalizes_like_bare_json() {
        let fenced = format!("```json\n{METADATA}\n```");
        let bare = parse_metadata(METADATA).unwrap();
        assert_eq!(parse_metadata(&fenced).unwrap(), bare);
    }

    #[test]
    fn test_unlabeled_fence_and_surrounding_whitespace() {
        let fenced = format!("  \n```\n{METADATA}\n```  \n");
        assert_eq!(
            parse_metadata(&fenced).unwrap(),
            parse_metadata(METADATA).unwrap()
        );
    }

    #[test]
    fn test_strip_code_fences_is_idempotent() {
        let once = strip_code_fences(&format!("```json\n{METADATA}\n```")).unwrap();
        let twice = strip_code_fences(&once).unwrap();
        assert_eq!(once, METADATA);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rate_limited_upstream_error() {
        let err = reply_text(429, r#"{"error":{"message":"rate limited"}}"#).unwrap_err();
        match err {
            MetadataError::Upstream { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("Expected Upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_upstream_error_without_message() {
        let err = reply_text(503, "<html>unavailable</html>").unwrap_err();
        assert_eq!(err.to_string(), "API error: Unknown error");
    }

    #[test]
    fn test_non_json_reply_is_parse_error() {
        let err = normalize(200, &envelope("Here is your metadata!")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let partial = r#"{"title":"t","description":"d","tags":["a"]}"#;
        let err = normalize(200, &envelope(partial)).unwrap_err();
        assert!(matches!(err, MetadataError::Parse(_)));
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn test_empty_content_is_parse_error() {
        let err = reply_text(200, r#"{"content":[]}"#).unwrap_err();
        assert!(matches!(err, MetadataError::EmptyReply));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_first_text_segment_is_used() {
        let body = json!({
            "content": [
                {"type": "text", "text": METADATA},
                {"type": "text", "text": "ignored"},
            ]
        })
        .to_string();
        assert_eq!(reply_text(200, &body).unwrap(), METADATA);
    }
}
