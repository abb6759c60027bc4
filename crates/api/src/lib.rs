//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Upload routes that forward files to the selected providers
//! - Health check route
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use pinrelay_core::forward::Dispatcher;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Forwards uploads to providers.
    pub dispatcher: Arc<Dispatcher>,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
