//! Upload request errors and their HTTP mapping.

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pinrelay_core::forward::ForwardError;
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

/// Anything that makes an upload request fail.
///
/// Callers always receive the same generic 500 body; the variant only shows
/// up in logs.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Request is not a multipart form.
    #[error("request is not multipart: {0}")]
    NotMultipart(#[from] MultipartRejection),

    /// Multipart body could not be read.
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// No file part under the expected field.
    #[error("missing file field '{0}'")]
    MissingFile(&'static str),

    /// More than one file part under the expected field.
    #[error("more than one file in field '{0}'")]
    DuplicateFile(&'static str),

    /// No `selectedStorages` field.
    #[error("missing selectedStorages field")]
    MissingSelection,

    /// More than one `selectedStorages` field.
    #[error("more than one selectedStorages field")]
    DuplicateSelection,

    /// `selectedStorages` is not a list of `{"value": ...}` records.
    #[error("invalid selectedStorages payload: {0}")]
    InvalidSelection(#[from] serde_json::Error),

    /// A provider forward failed.
    #[error(transparent)]
    Forward(#[from] ForwardError),

    /// The forwarding task panicked or was cancelled.
    #[error("forwarding task failed: {0}")]
    Join(#[from] JoinError),
}

impl UploadError {
    /// Error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotMultipart(_) => "NOT_MULTIPART",
            Self::Multipart(_) => "MALFORMED_MULTIPART",
            Self::MissingFile(_) => "MISSING_FILE",
            Self::DuplicateFile(_) => "DUPLICATE_FILE",
            Self::MissingSelection => "MISSING_SELECTION",
            Self::DuplicateSelection => "DUPLICATE_SELECTION",
            Self::InvalidSelection(_) => "INVALID_SELECTION",
            Self::Forward(_) => "FORWARD_FAILED",
            Self::Join(_) => "FORWARD_TASK_FAILED",
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        error!(code = self.error_code(), error = %self, "Upload request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response()
    }
}
