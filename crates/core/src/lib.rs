//! Core forwarding logic for Pinrelay.
//!
//! This crate knows how to reach each upload provider and how to fan an
//! upload out to a caller's selection. It has no web server dependencies;
//! the HTTP surface lives in `pinrelay-api`.
//!
//! # Modules
//!
//! - `forward` - Provider model, selection, adapters, and the dispatcher

pub mod forward;
