//! Prefabrica web client: public marketing pages plus the authenticated
//! administration panel, built as a Leptos CSR application.
//!
//! Session state, route access rules, and the navigation guard live under
//! [`features::auth`] and [`routes::registry`]; everything is plain Rust so
//! the access-control core also compiles and tests on the native host.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
