//! Reading transcriptions and edited metadata from disk.

use sermon_meta::GenerationResult;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Please upload a .txt file")]
    NotTextFile,
    #[error("Failed to read text file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to read metadata file: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Reads a plain-text transcription. Only `.txt` files are accepted.
pub fn read_transcription_file(path: &Path) -> Result<String, InputError> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if !is_txt {
        return Err(InputError::NotTextFile);
    }
    Ok(fs::read_to_string(path)?)
}

/// Reads a (possibly hand-edited) metadata JSON file.
pub fn read_metadata_file(path: &Path) -> Result<GenerationResult, InputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
