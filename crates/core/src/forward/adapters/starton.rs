use reqwest::{Client, RequestBuilder, multipart::Form};

use pinrelay_shared::StartonConfig;

use super::Adapter;
use crate::forward::Provider;

/// Header carrying the Starton API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Starton IPFS adapter. Sends the file alone, keyed by `x-api-key`.
#[derive(Debug, Clone)]
pub struct StartonAdapter {
    upload_url: String,
    api_key: String,
}

impl StartonAdapter {
    /// Create the adapter from configuration.
    #[must_use]
    pub fn new(config: &StartonConfig) -> Self {
        Self {
            upload_url: config.upload_url(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Adapter for StartonAdapter {
    fn provider(&self) -> Provider {
        Provider::Starton
    }

    fn target_url(&self) -> &str {
        &self.upload_url
    }

    fn prepare(&self, client: &Client, form: Form) -> RequestBuilder {
        client
            .post(&self.upload_url)
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
    }
}
