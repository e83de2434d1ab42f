//! Token persistence. The whole app reads and writes exactly one
//! localStorage key, and the value is the raw token string. Sessions
//! created by earlier deployments decode with no migration.

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the session token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// localStorage-backed store. Uses the raw web-sys API because the typed
/// storage wrappers JSON-encode strings, which would quote the token on
/// disk. Storage failures (private browsing, quota) degrade to an
/// in-memory-only session.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_STORAGE_KEY).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) {}

    fn clear(&self) {}
}

/// In-memory store for tests and native builds.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);

        store.save("a.b.c");
        assert_eq!(store.load(), Some("a.b.c".to_string()));

        store.save("x.y.z");
        assert_eq!(store.load(), Some("x.y.z".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
        store.clear();
        assert_eq!(store.load(), None);
    }
}
