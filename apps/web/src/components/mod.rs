//! Shared UI components exported for routes and features.

pub mod layout;
pub mod ui;

pub use layout::{AdminShell, AppShell, Sidebar};
pub use ui::{Alert, AlertKind, Button, Spinner};
