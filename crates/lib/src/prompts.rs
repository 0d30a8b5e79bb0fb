//! # Prompt Templates
//!
//! The single prompt sent to the model for metadata generation.

/// The default model identifier for the Anthropic Messages API.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// The output token budget for one generation call.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// The user prompt for metadata generation.
///
/// Placeholders: `{transcription}`
pub const METADATA_GENERATION_PROMPT: &str = r#"Based on this one-minute sermon transcription, generate YouTube metadata in JSON format:

Transcription: "{transcription}"

Generate:
1. A compelling, SEO-friendly title (under 60 characters)
2. A detailed description (2-3 paragraphs, include key themes and takeaways)
3. 8-10 relevant tags
4. A brief summary (1-2 sentences)

Respond ONLY with valid JSON in this exact format:
{
  "title": "string",
  "description": "string",
  "tags": ["tag1", "tag2", ...],
  "summary": "string"
}

DO NOT include any markdown, backticks, or text outside the JSON object."#;

/// Embeds the transcription verbatim into the generation prompt.
pub fn build_metadata_prompt(transcription: &str) -> String {
    METADATA_GENERATION_PROMPT.replace("{transcription}", transcription)
}
