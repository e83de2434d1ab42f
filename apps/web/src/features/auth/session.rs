//! The session store: single owner of authentication state. Every
//! mutation keeps three places consistent at once: the in-memory session,
//! the persisted token, and the API client's bearer header.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::app_lib::{ApiClient, ApiError};
use crate::features::auth::client;
use crate::features::auth::storage::{BrowserTokenStore, MemoryTokenStore, TokenStore};
use crate::features::auth::types::Session;
use leptos::prelude::*;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum SessionError {
    /// The token did not decode; the session has been reset.
    MalformedCredential(session_token::Error),
    Api(ApiError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MalformedCredential(err) => {
                write!(formatter, "No se pudo validar la sesión: {err}")
            }
            SessionError::Api(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    /// Raised by the unauthorized hook; the navigation guard consumes it
    /// and forces the login page.
    pub session_expired: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_super_admin: Signal<bool>,
    pub is_admin_tier: Signal<bool>,
    storage: Arc<dyn TokenStore + Send + Sync>,
    api: ApiClient,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage: Arc<dyn TokenStore + Send + Sync>) -> Self {
        let session = RwSignal::new(Session::default());
        let is_authenticated = Signal::derive(move || session.with(Session::is_authenticated));
        let is_super_admin = Signal::derive(move || session.with(Session::is_super_admin));
        let is_admin_tier = Signal::derive(move || session.with(Session::is_admin_tier));
        Self {
            session,
            session_expired: RwSignal::new(false),
            is_authenticated,
            is_super_admin,
            is_admin_tier,
            storage,
            api,
        }
    }

    /// Restores the session from the persisted token at startup. A stored
    /// token that no longer decodes is discarded and the app starts logged
    /// out.
    pub fn initialize(&self) {
        let Some(token) = self.storage.load() else {
            return;
        };
        match session_token::decode_claims(&token) {
            Ok(claims) => {
                self.api.set_bearer_token(&token);
                self.session.set(Session::from_token(token, claims));
            }
            Err(err) => {
                log::warn!("Discarding stored session token: {err}");
                self.clear_token();
            }
        }
    }

    /// Adopts a freshly issued token: decode first, persist and attach the
    /// bearer header only if that succeeds. A malformed token resets the
    /// session and is never written to storage.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        match session_token::decode_claims(token) {
            Ok(claims) => {
                self.storage.save(token);
                self.api.set_bearer_token(token);
                self.session.set(Session::from_token(token, claims));
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejecting malformed session token: {err}");
                self.clear_token();
                Err(SessionError::MalformedCredential(err))
            }
        }
    }

    /// Drops the session everywhere it lives: memory, storage, bearer
    /// header. Idempotent.
    pub fn clear_token(&self) {
        self.session.set(Session::default());
        self.storage.clear();
        self.api.clear_bearer_token();
    }

    /// Exchanges credentials for a session token and adopts it. Navigation
    /// after a successful login is the login page's decision, not ours.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let response = client::login(&self.api, email, password)
            .await
            .map_err(SessionError::Api)?;
        self.set_token(&response.token)
    }

    /// Local sign-out. The API keeps no session state for this client, so
    /// there is nothing to revoke server-side.
    pub fn logout(&self) {
        self.clear_token();
    }

    /// Wires the API client's 401 handling to this store: tear the session
    /// down and raise `session_expired`. The failed call still returns its
    /// error to the caller.
    pub fn install_unauthorized_hook(&self) {
        let store = self.clone();
        self.api.set_unauthorized_hook(move || {
            store.clear_token();
            store.session_expired.set(true);
        });
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }
}

/// Provides the session store and restores any persisted session before
/// children render.
#[component]
pub fn SessionProvider(api: ApiClient, children: Children) -> impl IntoView {
    let store = SessionStore::new(api, Arc::new(BrowserTokenStore));
    store.initialize();
    store.install_unauthorized_hook();
    provide_context(store);

    view! { {children()} }
}

/// Returns the current session store or a fallback disconnected store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        SessionStore::new(ApiClient::new(""), Arc::new(MemoryTokenStore::default()))
    })
}
