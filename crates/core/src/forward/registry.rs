//! Fixed provider-to-adapter mapping.

use pinrelay_shared::ProvidersConfig;

use super::adapters::{Adapter, CloudinaryAdapter, DolpinAdapter, PinataAdapter, StartonAdapter};
use super::provider::Provider;

/// One immutable adapter per provider, built once at startup.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    dolpin: DolpinAdapter,
    cloudinary: CloudinaryAdapter,
    pinata: PinataAdapter,
    starton: StartonAdapter,
}

impl ProviderRegistry {
    /// Build every adapter from configuration.
    #[must_use]
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self {
            dolpin: DolpinAdapter::new(&config.dolpin),
            cloudinary: CloudinaryAdapter::new(&config.cloudinary),
            pinata: PinataAdapter::new(&config.pinata),
            starton: StartonAdapter::new(&config.starton),
        }
    }

    /// Adapter for `provider`.
    #[must_use]
    pub fn adapter(&self, provider: Provider) -> &dyn Adapter {
        match provider {
            Provider::Dolpin => &self.dolpin,
            Provider::Cloudinary => &self.cloudinary,
            Provider::Pinata => &self.pinata,
            Provider::Starton => &self.starton,
        }
    }
}
