use reqwest::{Client, RequestBuilder, header::AUTHORIZATION, multipart::Form};

use pinrelay_shared::PinataConfig;

use super::Adapter;
use crate::forward::Provider;

const PINATA_METADATA: &str = r#"{"name":"File name"}"#;
const PINATA_OPTIONS: &str = r#"{"cidVersion":0}"#;

/// Pinata pinning adapter. Authenticates with a bearer JWT.
#[derive(Debug, Clone)]
pub struct PinataAdapter {
    api_url: String,
    authorization: String,
}

impl PinataAdapter {
    /// Create the adapter from configuration.
    ///
    /// A JWT configured with its `Bearer ` prefix is used as-is.
    #[must_use]
    pub fn new(config: &PinataConfig) -> Self {
        let authorization = if config.jwt.starts_with("Bearer ") {
            config.jwt.clone()
        } else {
            format!("Bearer {}", config.jwt)
        };

        Self {
            api_url: config.api_url.clone(),
            authorization,
        }
    }
}

impl Adapter for PinataAdapter {
    fn provider(&self) -> Provider {
        Provider::Pinata
    }

    fn target_url(&self) -> &str {
        &self.api_url
    }

    fn prepare(&self, client: &Client, form: Form) -> RequestBuilder {
        let form = form
            .text("pinataMetadata", PINATA_METADATA)
            .text("pinataOptions", PINATA_OPTIONS);

        client
            .post(&self.api_url)
            .header(AUTHORIZATION, &self.authorization)
            .multipart(form)
    }
}
