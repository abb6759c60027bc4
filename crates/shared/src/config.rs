//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload provider configuration.
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_body_limit() -> usize {
    100 * 1024 * 1024 // 100 MiB
}

/// Endpoints and credentials for every upload provider.
///
/// Every field falls back to a default (an empty string for secrets), so a
/// missing credential only shows up as a failed upload at request time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvidersConfig {
    /// Dolpin gateway.
    #[serde(default)]
    pub dolpin: DolpinConfig,
    /// Cloudinary upload API.
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
    /// Pinata pinning API.
    #[serde(default)]
    pub pinata: PinataConfig,
    /// Starton IPFS API.
    #[serde(default)]
    pub starton: StartonConfig,
}

/// Dolpin configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DolpinConfig {
    /// Upload endpoint, without the token query parameter.
    #[serde(default = "default_dolpin_api_url")]
    pub api_url: String,
    /// API token sent as the `api_token` query parameter.
    #[serde(default)]
    pub api_token: String,
}

impl Default for DolpinConfig {
    fn default() -> Self {
        Self {
            api_url: default_dolpin_api_url(),
            api_token: String::new(),
        }
    }
}

fn default_dolpin_api_url() -> String {
    "https://gateway.dolpin.io/api/v1/documents/upload-in-cluster-with-api".to_string()
}

/// Cloudinary configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudinaryConfig {
    /// Explicit upload endpoint. Derived from `cloud_name` when empty.
    #[serde(default)]
    pub api_url: String,
    /// Cloud name of the account.
    #[serde(default)]
    pub cloud_name: String,
    /// Public API key.
    #[serde(default)]
    pub api_key: String,
    /// Secret used to sign upload requests.
    #[serde(default)]
    pub api_secret: String,
}

impl CloudinaryConfig {
    /// Returns the upload endpoint for this account.
    #[must_use]
    pub fn upload_url(&self) -> String {
        if self.api_url.is_empty() {
            format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                self.cloud_name
            )
        } else {
            self.api_url.clone()
        }
    }
}

/// Pinata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PinataConfig {
    /// `pinFileToIPFS` endpoint.
    #[serde(default = "default_pinata_api_url")]
    pub api_url: String,
    /// JWT sent in the `Authorization` header.
    #[serde(default)]
    pub jwt: String,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_url: default_pinata_api_url(),
            jwt: String::new(),
        }
    }
}

fn default_pinata_api_url() -> String {
    "https://api.pinata.cloud/pinning/pinFileToIPFS".to_string()
}

/// Starton configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StartonConfig {
    /// API base URL.
    #[serde(default = "default_starton_base_url")]
    pub base_url: String,
    /// Upload path relative to `base_url`.
    #[serde(default = "default_starton_path")]
    pub path: String,
    /// Key sent in the `x-api-key` header.
    #[serde(default)]
    pub api_key: String,
}

impl Default for StartonConfig {
    fn default() -> Self {
        Self {
            base_url: default_starton_base_url(),
            path: default_starton_path(),
            api_key: String::new(),
        }
    }
}

impl StartonConfig {
    /// Joins the base URL and upload path.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

fn default_starton_base_url() -> String {
    "https://api.starton.com".to_string()
}

fn default_starton_path() -> String {
    "/v3/ipfs/file".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `PINRELAY__*` environment variables (e.g.
    /// `PINRELAY__PROVIDERS__PINATA__JWT`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PINRELAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
