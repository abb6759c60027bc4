//! Shared configuration for Pinrelay.
//!
//! This crate provides the process-wide configuration used by the other
//! crates:
//! - HTTP server settings
//! - Per-provider endpoints and credentials

pub mod config;

pub use config::{
    AppConfig, CloudinaryConfig, DolpinConfig, PinataConfig, ProvidersConfig, ServerConfig,
    StartonConfig,
};
