//! Shared frontend utilities for API access, configuration, errors, and
//! build metadata.
//!
//! The one piece of state that lives here is the [`ApiClient`]: it carries
//! the default headers (content negotiation plus the session bearer token)
//! and the unauthorized hook, so the session store and every feature client
//! observe the same request policy. Centralizing these helpers keeps
//! network behavior consistent and avoids duplicated logic in routes and
//! features. These utilities never log tokens or credentials.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::ApiError;
