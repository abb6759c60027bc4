//! Upload routes.
//!
//! `POST /upload/file` forwards to every provider named in `selectedStorages`;
//! the `/upload/{provider}` routes forward to one provider only.

use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{AppState, error::UploadError};
use pinrelay_core::forward::{
    DEFAULT_CONTENT_TYPE, ForwardError, Provider, ProviderSelection, UploadedFile,
};

/// Multipart field holding the file.
const FILE_FIELD: &str = "file";
/// Dolpin's route historically used a plural field name.
const DOLPIN_FILE_FIELD: &str = "files";
/// Multipart field holding the JSON provider selection.
const SELECTION_FIELD: &str = "selectedStorages";

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload/file", post(upload_file))
        .route("/upload/dolpin", post(upload_dolpin))
        .route("/upload/cloudinary", post(upload_cloudinary))
        .route("/upload/pinata", post(upload_pinata))
        .route("/upload/starton", post(upload_starton))
}

/// Parts of an upload form this service cares about.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    selected_storages: Option<String>,
}

/// Reads the multipart body, keeping the file under `file_field` and the
/// selection payload. Other fields are skipped. Each of the two may appear
/// once.
async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
    file_field: &'static str,
) -> Result<UploadForm, UploadError> {
    let mut multipart = multipart?;
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            // A part without a filename is a plain text field, not an upload
            let Some(filename) = field.file_name().map(str::to_string) else {
                debug!(field = %name, "Skipping file field without a filename");
                continue;
            };
            if form.file.is_some() {
                return Err(UploadError::DuplicateFile(file_field));
            }
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string();
            let bytes = field.bytes().await?;
            form.file = Some(UploadedFile::new(bytes, filename, content_type));
        } else if name == SELECTION_FIELD {
            if form.selected_storages.is_some() {
                return Err(UploadError::DuplicateSelection);
            }
            form.selected_storages = Some(field.text().await?);
        } else {
            debug!(field = %name, "Skipping unexpected multipart field");
        }
    }

    Ok(form)
}

/// POST `/upload/file`
/// Forward one file to every selected provider, in registry order.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, UploadError> {
    let form = read_form(multipart, FILE_FIELD).await?;
    let file = form.file.ok_or(UploadError::MissingFile(FILE_FIELD))?;
    let raw_selection = form
        .selected_storages
        .ok_or(UploadError::MissingSelection)?;
    let selection = ProviderSelection::parse(&raw_selection)?;

    // Forwards run on their own task so a caller hanging up does not cancel
    // outbound calls already under way.
    let dispatcher = Arc::clone(&state.dispatcher);
    tokio::spawn(async move {
        let delivered = dispatcher.dispatch(&file, &selection).await?;
        info!(
            filename = %file.filename,
            size = file.len(),
            providers = ?delivered,
            "Upload forwarded"
        );
        Ok::<_, ForwardError>(())
    })
    .await??;

    Ok(Json(json!({})))
}

/// Forward one file to a single provider.
async fn upload_single(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
    provider: Provider,
    file_field: &'static str,
) -> Result<Json<Value>, UploadError> {
    let form = read_form(multipart, file_field).await?;
    let file = form.file.ok_or(UploadError::MissingFile(file_field))?;

    let dispatcher = Arc::clone(&state.dispatcher);
    tokio::spawn(async move { dispatcher.forward(provider, &file).await }).await??;

    Ok(Json(json!({})))
}

/// POST `/upload/dolpin`
async fn upload_dolpin(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, UploadError> {
    upload_single(&state, multipart, Provider::Dolpin, DOLPIN_FILE_FIELD).await
}

/// POST `/upload/cloudinary`
async fn upload_cloudinary(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, UploadError> {
    upload_single(&state, multipart, Provider::Cloudinary, FILE_FIELD).await
}

/// POST `/upload/pinata`
async fn upload_pinata(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, UploadError> {
    upload_single(&state, multipart, Provider::Pinata, FILE_FIELD).await
}

/// POST `/upload/starton`
async fn upload_starton(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, UploadError> {
    upload_single(&state, multipart, Provider::Starton, FILE_FIELD).await
}
