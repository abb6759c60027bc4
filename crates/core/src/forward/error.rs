//! Forwarding error types.

use thiserror::Error;

use super::provider::Provider;

/// Errors raised while forwarding an upload to a provider.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The request never got a response (connection, TLS, invalid URL...).
    #[error("request to {provider} failed: {source}")]
    Transport {
        /// Provider being called.
        provider: Provider,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status.
    #[error("{provider} responded with status {status}")]
    Status {
        /// Provider being called.
        provider: Provider,
        /// HTTP status code returned.
        status: u16,
    },

    /// The uploaded file declared a content type that is not a valid MIME type.
    #[error("invalid content type '{content_type}'")]
    InvalidContentType {
        /// The rejected content type.
        content_type: String,
    },
}

impl ForwardError {
    /// Create a transport error.
    #[must_use]
    pub fn transport(provider: Provider, source: reqwest::Error) -> Self {
        Self::Transport { provider, source }
    }

    /// Create a status error.
    #[must_use]
    pub fn status(provider: Provider, status: u16) -> Self {
        Self::Status { provider, status }
    }

    /// Create an invalid content type error.
    #[must_use]
    pub fn invalid_content_type(content_type: impl Into<String>) -> Self {
        Self::InvalidContentType {
            content_type: content_type.into(),
        }
    }

    /// Provider the failure happened on, when known.
    #[must_use]
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::Transport { provider, .. } | Self::Status { provider, .. } => Some(*provider),
            Self::InvalidContentType { .. } => None,
        }
    }
}
