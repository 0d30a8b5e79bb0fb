//! # sermon-meta: A CLI for `sermon-meta-server`
//!
//! Sends a sermon transcription to the server, prints the generated YouTube
//! metadata, and exports the result as a plain-text file.

mod api_client;
mod input;

use anyhow::{bail, Result};
use api_client::{ApiClient, ApiError};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use sermon_meta::{
    export::{export_file_name, render_export},
    GenerationLifecycle, GenerationResult,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate YouTube metadata for a transcription
    Generate(GenerateArgs),
    /// Export a transcription with (edited) metadata to a text file
    Export(ExportArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct TranscriptionSource {
    /// The transcription text itself
    #[arg(long)]
    text: Option<String>,
    /// A .txt file containing the transcription
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    source: TranscriptionSource,
    /// Base URL of the sermon-meta server
    #[arg(long, env = "SERMON_META_SERVER", default_value = "http://localhost:3001")]
    server: String,
    /// Print the metadata as JSON (suitable for editing and `export`)
    #[arg(long)]
    json: bool,
    /// Also export to a text file in this directory (default: current directory)
    #[arg(long, num_args = 0..=1, default_missing_value = ".")]
    export: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    source: TranscriptionSource,
    /// A metadata JSON file, as printed by `generate --json`
    #[arg(long)]
    metadata: PathBuf,
    /// Directory to write the export into
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Export(args) => handle_export(args),
    }
}

// --- Command Handlers ---

fn read_source(source: &TranscriptionSource) -> Result<String> {
    match (&source.text, &source.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(input::read_transcription_file(path)?),
        (None, None) => bail!("Please provide a transcription first"),
    }
}

async fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let transcription = read_source(&args.source)?;
    if transcription.trim().is_empty() {
        bail!("Please provide a transcription first");
    }

    let client = ApiClient::new(&args.server);
    let mut lifecycle = GenerationLifecycle::default();
    if !lifecycle.begin() {
        bail!("A generation request is already in progress");
    }

    let outcome = client.generate_metadata(&transcription).await;
    if let Err(ApiError::Server { status, .. }) = &outcome {
        warn!(status, "Server rejected the metadata request");
    }
    lifecycle.complete(outcome);

    let metadata = match &lifecycle {
        GenerationLifecycle::Succeeded(metadata) => metadata,
        GenerationLifecycle::Failed(message) => bail!(
            "Failed to generate metadata: {message}. Make sure the server is running (sermon-meta-server)."
        ),
        other => bail!("Unexpected generation state: {other:?}"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(metadata)?);
    } else {
        print_metadata(metadata);
    }

    if let Some(dir) = &args.export {
        let path = write_export(dir, &transcription, metadata)?;
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}

fn handle_export(args: &ExportArgs) -> Result<()> {
    let transcription = read_source(&args.source)?;
    let metadata = input::read_metadata_file(&args.metadata)?;
    let path = write_export(&args.out, &transcription, &metadata)?;
    println!("Exported to {}", path.display());
    Ok(())
}

fn print_metadata(metadata: &GenerationResult) {
    println!("TITLE ({} chars):\n{}\n", metadata.title.chars().count(), metadata.title);
    println!("DESCRIPTION:\n{}\n", metadata.description);
    println!("TAGS ({}):\n{}\n", metadata.tags.len(), metadata.tags.join(", "));
    println!("SUMMARY:\n{}", metadata.summary);
}

fn write_export(dir: &Path, transcription: &str, metadata: &GenerationResult) -> Result<PathBuf> {
    let now = Local::now();
    let content = render_export(transcription, Some(metadata), now.date_naive())?;
    let path = dir.join(export_file_name(now));
    fs::write(&path, content)?;
    info!(path = %path.display(), "Export written");
    Ok(path)
}
