use chrono::Utc;
use reqwest::{Client, RequestBuilder, multipart::Form};

use pinrelay_shared::CloudinaryConfig;

use super::Adapter;
use crate::forward::{Provider, signature};

/// Cloudinary upload adapter.
///
/// Authenticates with signed form fields: the public API key, the current
/// Unix timestamp, and a signature over that timestamp.
#[derive(Debug, Clone)]
pub struct CloudinaryAdapter {
    upload_url: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryAdapter {
    /// Create the adapter from configuration.
    #[must_use]
    pub fn new(config: &CloudinaryConfig) -> Self {
        Self {
            upload_url: config.upload_url(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    /// Authentication fields for an upload made at `timestamp`.
    #[must_use]
    pub fn signed_fields(&self, timestamp: i64) -> [(&'static str, String); 3] {
        [
            ("api_key", self.api_key.clone()),
            ("timestamp", timestamp.to_string()),
            (
                "signature",
                signature::sign_timestamp(timestamp, &self.api_secret),
            ),
        ]
    }
}

impl Adapter for CloudinaryAdapter {
    fn provider(&self) -> Provider {
        Provider::Cloudinary
    }

    fn target_url(&self) -> &str {
        &self.upload_url
    }

    fn prepare(&self, client: &Client, form: Form) -> RequestBuilder {
        let form = self
            .signed_fields(Utc::now().timestamp())
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value));

        client.post(&self.upload_url).multipart(form)
    }
}
