//! Auth feature module covering login, session persistence, claims-backed
//! role checks, and the navigation guard. It keeps authentication logic out
//! of the UI and must avoid logging credentials or token material.
//!
//! Flow overview: login exchanges credentials for a token, the session
//! store decodes it before adopting it, and every later request carries it
//! as a bearer header. A 401 from any endpoint expires the session and
//! forces the login page.

pub mod client;
pub mod guards;
pub mod session;
pub mod storage;
pub mod types;

pub use guards::NavigationGuard;
pub use session::{SessionProvider, SessionStore, use_session};
