//! # Route Handlers
//!
//! The root and health endpoints, and the metadata generation endpoint.

use super::{errors::AppError, state::AppState};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use sermon_meta::{GenerationRequest, GenerationResult};
use tracing::info;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "sermon-meta server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for `POST /api/generate-metadata`.
///
/// A body that is not JSON, or has no usable `transcription`, yields `400`. Upstream
/// failures keep the upstream status; anything else is a `500`.
pub async fn generate_metadata_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    info!(
        chars = request.transcription.as_deref().map(|t| t.chars().count()),
        "Received metadata generation request"
    );

    let metadata = app_state.metadata_client.generate(&request).await?;

    info!(title = %metadata.title, tags = metadata.tags.len(), "Metadata generated");
    Ok(Json(metadata))
}
