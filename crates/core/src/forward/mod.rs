//! Upload forwarding to external storage and pinning providers.
//!
//! An uploaded file is re-encoded as a fresh multipart payload and posted to
//! each selected provider in turn:
//!
//! ```text
//! ┌──────────────┐    ┌────────────┐    ┌──────────────────────────────┐
//! │ UploadedFile │───▶│ Dispatcher │───▶│ ProviderRegistry             │
//! │ + Selection  │    │ (in order, │    │  Dolpin     → api_token query │
//! └──────────────┘    │  stop on   │    │  Cloudinary → signed fields   │
//!                     │  failure)  │    │  Pinata     → Bearer JWT      │
//!                     └────────────┘    │  Starton    → x-api-key       │
//!                                       └──────────────────────────────┘
//! ```
//!
//! Forwards are sequential. The first failure aborts the remaining forwards
//! and earlier successful forwards are left in place.

pub mod adapters;
mod dispatcher;
mod error;
mod file;
mod provider;
mod registry;
mod selection;
pub mod signature;

pub use adapters::Adapter;
pub use dispatcher::Dispatcher;
pub use error::ForwardError;
pub use file::{DEFAULT_CONTENT_TYPE, UploadedFile};
pub use provider::Provider;
pub use registry::ProviderRegistry;
pub use selection::{ProviderSelection, SelectionEntry};
