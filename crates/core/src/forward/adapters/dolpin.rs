use reqwest::{Client, RequestBuilder, multipart::Form};

use pinrelay_shared::DolpinConfig;

use super::Adapter;
use crate::forward::Provider;

/// Value Dolpin expects in the `name` field.
const DOCUMENT_NAME: &str = "file name";

/// Dolpin gateway adapter. Authenticates with an `api_token` query parameter.
#[derive(Debug, Clone)]
pub struct DolpinAdapter {
    api_url: String,
    api_token: String,
}

impl DolpinAdapter {
    /// Create the adapter from configuration.
    #[must_use]
    pub fn new(config: &DolpinConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

impl Adapter for DolpinAdapter {
    fn provider(&self) -> Provider {
        Provider::Dolpin
    }

    fn target_url(&self) -> &str {
        &self.api_url
    }

    fn prepare(&self, client: &Client, form: Form) -> RequestBuilder {
        let request = client.post(&self.api_url);
        let request = if self.api_token.is_empty() {
            request
        } else {
            request.query(&[("api_token", self.api_token.as_str())])
        };

        request.multipart(form.text("name", DOCUMENT_NAME))
    }
}
