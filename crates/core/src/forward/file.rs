//! The file being forwarded.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use super::error::ForwardError;

/// Content type used when the client did not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received from the caller, held in memory for the request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File contents.
    pub bytes: Bytes,
    /// Original filename.
    pub filename: String,
    /// Declared MIME type.
    pub content_type: String,
}

impl UploadedFile {
    /// Create an uploaded file.
    pub fn new(
        bytes: impl Into<Bytes>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Builds a fresh multipart form carrying the file under `file`.
    ///
    /// The bytes are shared, not copied.
    pub(crate) fn to_form(&self) -> Result<Form, ForwardError> {
        let part = Part::stream_with_length(self.bytes.clone(), self.bytes.len() as u64)
            .file_name(self.filename.clone())
            .mime_str(&self.content_type)
            .map_err(|_| ForwardError::invalid_content_type(&self.content_type))?;

        Ok(Form::new().part("file", part))
    }
}
