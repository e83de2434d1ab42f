//! Layout components shared across routes.

mod admin_shell;
mod app_shell;
mod sidebar;

pub use admin_shell::AdminShell;
pub use app_shell::AppShell;
pub use sidebar::Sidebar;
