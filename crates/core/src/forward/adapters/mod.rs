//! Provider-specific request shaping.
//!
//! Every adapter receives a multipart form that already carries the file
//! under `file`, appends its own fields, and returns the outbound request
//! with the provider's authentication applied. Sending and status handling
//! live in the dispatcher, so adapters stay free of I/O.

mod cloudinary;
mod dolpin;
mod pinata;
mod starton;

pub use cloudinary::CloudinaryAdapter;
pub use dolpin::DolpinAdapter;
pub use pinata::PinataAdapter;
pub use starton::StartonAdapter;

use reqwest::{Client, RequestBuilder, multipart::Form};

use super::provider::Provider;

/// Shapes the outbound upload request for one provider.
pub trait Adapter: Send + Sync {
    /// Provider this adapter talks to.
    fn provider(&self) -> Provider;

    /// Endpoint the upload is posted to.
    fn target_url(&self) -> &str;

    /// Builds the outbound request from a form holding the file part.
    fn prepare(&self, client: &Client, form: Form) -> RequestBuilder;
}
