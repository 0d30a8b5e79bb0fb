use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sermon_meta::{ErrorKind, MetadataError};
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates the errors a handler can produce, so they can be
/// converted into an HTTP status and a `{ "error": ... }` body.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the metadata pipeline.
    Metadata(MetadataError),
    /// The request body could not be read as JSON.
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        AppError::Metadata(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Metadata(err) => {
                let status_code = match (err.kind(), &err) {
                    (ErrorKind::Validation, _) => StatusCode::BAD_REQUEST,
                    (ErrorKind::Upstream, MetadataError::Upstream { status, .. }) => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status_code.is_server_error() {
                    error!("Server error: {:?}", err);
                } else {
                    warn!("Request failed: {}", err);
                }
                (status_code, err.to_string())
            }
            AppError::BadRequest(message) => {
                warn!("Rejected malformed request body: {message}");
                (
                    StatusCode::BAD_REQUEST,
                    MetadataError::Validation.to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
