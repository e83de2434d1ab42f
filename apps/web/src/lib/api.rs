//! HTTP client for the Prefabrica API with consistent timeouts and error
//! handling. One shared client owns the base URL, the default headers sent
//! with every request (including the session bearer token), and the hook
//! fired when the API answers 401, so session teardown happens in exactly
//! one place. Request sending only runs in the browser; URL building,
//! header state, and status handling are plain Rust.

use super::errors::ApiError;
use leptos::prelude::*;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default request timeout (milliseconds) applied to all requests.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

pub const AUTHORIZATION: &str = "Authorization";

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shared API client. Cheap to clone; clones share header and hook state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: RwSignal<BTreeMap<String, String>>,
    on_unauthorized: RwSignal<Option<UnauthorizedHook>>,
}

impl ApiClient {
    /// Builds a client that sends JSON by default, matching what the API
    /// expects from every caller.
    pub fn new(base_url: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.to_string(),
            default_headers: RwSignal::new(headers),
            on_unauthorized: RwSignal::new(None),
        }
    }

    /// Attaches `Authorization: Bearer <token>` to every subsequent request.
    pub fn set_bearer_token(&self, token: &str) {
        let value = format!("Bearer {token}");
        self.default_headers.update_untracked(|headers| {
            headers.insert(AUTHORIZATION.to_string(), value);
        });
    }

    /// Removes the bearer header. Safe to call when none is set.
    pub fn clear_bearer_token(&self) {
        self.default_headers.update_untracked(|headers| {
            headers.remove(AUTHORIZATION);
        });
    }

    pub fn default_header(&self, name: &str) -> Option<String> {
        self.default_headers
            .with_untracked(|headers| headers.get(name).cloned())
    }

    /// Registers the hook fired on any 401 response. The last registration
    /// wins; the app installs exactly one at startup.
    pub fn set_unauthorized_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_unauthorized.set(Some(Arc::new(hook)));
    }

    fn notify_unauthorized(&self) {
        if let Some(hook) = self.on_unauthorized.get_untracked() {
            hook();
        }
    }

    /// Maps a failed response to an error. A 401 additionally fires the
    /// unauthorized hook before the caller sees the failure, so every call
    /// site observes the same teardown-then-reject order.
    pub fn error_for_status(&self, status: u16, body: String) -> ApiError {
        if status == 401 {
            log::warn!("API returned 401, invalidating session");
            self.notify_unauthorized();
        }
        ApiError::Http {
            status,
            message: sanitize_body(body),
        }
    }

    /// Posts JSON with the default headers (and cookies) and parses a JSON
    /// response.
    #[cfg(target_arch = "wasm32")]
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = build_url_with_base(&self.base_url, path);
        let headers = self.default_headers.get_untracked();
        let payload = serde_json::to_string(body)
            .map_err(|err| ApiError::Serialization(err.to_string()))?;
        let response = send_with_timeout(move |signal| {
            let mut builder = Request::post(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal));

            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            builder
                .body(payload)
                .map_err(|err| ApiError::Serialization(err.to_string()))
        })
        .await?;

        self.handle_json_response(response).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Network(
            "HTTP requests are only available in the browser.".to_string(),
        ))
    }

    /// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
    #[cfg(target_arch = "wasm32")]
    async fn handle_json_response<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Parse(err.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(self.error_for_status(status, body))
        }
    }
}

/// Builds a URL from a base URL and the provided path.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps request failure messages into user-facing errors with timeout
/// detection.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn classify_request_failure(message: &str) -> ApiError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Inténtalo de nuevo.".to_string())
    } else {
        ApiError::Network(message.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> ApiError {
    classify_request_failure(&err.to_string())
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, ApiError>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| ApiError::Config("No se pudo preparar el tiempo de espera.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "La solicitud falló.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn new_client_sends_json_by_default() {
        let api = ApiClient::new("https://api.test");
        assert_eq!(
            api.default_header("Accept"),
            Some("application/json".to_string())
        );
        assert_eq!(
            api.default_header("Content-Type"),
            Some("application/json".to_string())
        );
        assert_eq!(api.default_header(AUTHORIZATION), None);
    }

    #[test]
    fn bearer_token_round_trip() {
        let api = ApiClient::new("https://api.test");

        api.set_bearer_token("t-123");
        assert_eq!(
            api.default_header(AUTHORIZATION),
            Some("Bearer t-123".to_string())
        );

        api.clear_bearer_token();
        assert_eq!(api.default_header(AUTHORIZATION), None);

        // clearing twice stays clear
        api.clear_bearer_token();
        assert_eq!(api.default_header(AUTHORIZATION), None);
    }

    #[test]
    fn unauthorized_fires_hook_and_still_returns_the_error() {
        let api = ApiClient::new("https://api.test");
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_hook = Arc::clone(&fired);
        api.set_unauthorized_hook(move || {
            fired_in_hook.fetch_add(1, Ordering::SeqCst);
        });

        let err = api.error_for_status(401, "token expired".to_string());
        assert!(matches!(err, ApiError::Http { status: 401, .. }));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn non_unauthorized_failures_do_not_fire_the_hook() {
        let api = ApiClient::new("https://api.test");
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_hook = Arc::clone(&fired);
        api.set_unauthorized_hook(move || {
            fired_in_hook.fetch_add(1, Ordering::SeqCst);
        });

        let err = api.error_for_status(500, String::new());
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn error_for_status_without_hook_is_harmless() {
        let api = ApiClient::new("https://api.test");
        let err = api.error_for_status(401, String::new());
        assert!(matches!(err, ApiError::Http { status: 401, .. }));
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.test", "/login"),
            "https://api.test/login"
        );
        assert_eq!(
            build_url_with_base("https://api.test/", "login"),
            "https://api.test/login"
        );
        assert_eq!(build_url_with_base("", "/login"), "/login");
        assert_eq!(
            build_url_with_base("  https://api.test  ", "/login"),
            "https://api.test/login"
        );
    }

    #[test]
    fn classify_request_failure_detects_timeouts() {
        assert!(matches!(
            classify_request_failure("The operation was aborted"),
            ApiError::Timeout(_)
        ));
        assert!(matches!(
            classify_request_failure("network timeout reached"),
            ApiError::Timeout(_)
        ));
        assert!(matches!(
            classify_request_failure("connection refused"),
            ApiError::Network(_)
        ));
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "La solicitud falló.");
        assert_eq!(sanitize_body("   ".to_string()), "La solicitud falló.");
        assert_eq!(sanitize_body("  oops  ".to_string()), "oops");

        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(long).chars().count(), MAX_ERROR_CHARS);
    }
}
