//! # Plain-Text Export
//!
//! Renders an edited transcription and its metadata into the downloadable text
//! format, and names the export file.

use crate::types::GenerationResult;
use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

const RULE_WIDTH: usize = 50;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExportError {
    #[error("Cannot export: missing transcription or metadata")]
    MissingContent,
}

/// Renders the export document. `generated_on` is printed as `MM/DD/YYYY`.
pub fn render_export(
    transcription: &str,
    metadata: Option<&GenerationResult>,
    generated_on: NaiveDate,
) -> Result<String, ExportError> {
    let metadata = match metadata {
        Some(m) if !transcription.is_empty() => m,
        _ => return Err(ExportError::MissingContent),
    };
    let rule = "=".repeat(RULE_WIDTH);

    Ok(format!(
        "SERMON TRANSCRIPTION & METADATA\n\
         {rule}\n\
         \n\
         TITLE:\n\
         {title}\n\
         \n\
         DESCRIPTION:\n\
         {description}\n\
         \n\
         TAGS:\n\
         {tags}\n\
         \n\
         SUMMARY:\n\
         {summary}\n\
         \n\
         FULL TRANSCRIPTION:\n\
         {transcription}\n\
         \n\
         {rule}\n\
         Generated on {date}",
        title = metadata.title,
        description = metadata.description,
        tags = metadata.tags.join(", "),
        summary = metadata.summary,
        date = generated_on.format("%-m/%-d/%Y"),
    ))
}

/// The export file name, `sermon-<unix millis>.txt`.
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("sermon-{}.txt", at.timestamp_millis())
}
