//! Sequential forwarding of one upload to the selected providers.

use reqwest::Client;
use tracing::{debug, error, info};

use pinrelay_shared::ProvidersConfig;

use super::error::ForwardError;
use super::file::UploadedFile;
use super::provider::Provider;
use super::registry::ProviderRegistry;
use super::selection::ProviderSelection;

/// Forwards uploads to providers through their adapters.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    registry: ProviderRegistry,
}

impl Dispatcher {
    /// Create a dispatcher over an existing registry.
    #[must_use]
    pub fn new(client: Client, registry: ProviderRegistry) -> Self {
        Self { client, registry }
    }

    /// Create a dispatcher with adapters built from configuration.
    #[must_use]
    pub fn from_config(client: Client, config: &ProvidersConfig) -> Self {
        Self::new(client, ProviderRegistry::from_config(config))
    }

    /// Forwards `file` to every selected provider, in registry order.
    ///
    /// Stops at the first failure. Providers already forwarded to keep the
    /// file; providers after the failing one are not attempted.
    ///
    /// Returns the providers the file was delivered to.
    ///
    /// # Errors
    ///
    /// Returns the first forwarding error encountered.
    pub async fn dispatch(
        &self,
        file: &UploadedFile,
        selection: &ProviderSelection,
    ) -> Result<Vec<Provider>, ForwardError> {
        let mut delivered = Vec::with_capacity(selection.providers().len());

        for &provider in selection.providers() {
            if let Err(e) = self.forward(provider, file).await {
                error!(
                    provider = %provider,
                    delivered = ?delivered,
                    error = %e,
                    "Forward failed, skipping remaining providers"
                );
                return Err(e);
            }
            delivered.push(provider);
        }

        Ok(delivered)
    }

    /// Forwards `file` to a single provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be built, the request fails, or
    /// the provider answers with a non-2xx status.
    pub async fn forward(&self, provider: Provider, file: &UploadedFile) -> Result<(), ForwardError> {
        let adapter = self.registry.adapter(provider);
        let form = file.to_form()?;
        debug!(provider = %provider, url = adapter.target_url(), "Forwarding file");

        let response = adapter
            .prepare(&self.client, form)
            .send()
            .await
            .map_err(|e| ForwardError::transport(provider, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::status(provider, status.as_u16()));
        }

        info!(
            provider = %provider,
            filename = %file.filename,
            size = file.len(),
            status = status.as_u16(),
            "File forwarded"
        );

        Ok(())
    }
}
