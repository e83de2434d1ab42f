//! Build-time configuration for the API endpoint with an optional runtime
//! override read from `window.PREFABRICA_CONFIG`, so a static deployment
//! can point at another backend without rebuilding. Values here are
//! public; do not store secrets in them.

/// Frontend configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolves the API base URL. Precedence: runtime override, then the
    /// `PREFABRICA_API_BASE_URL` / `PREFABRICA_API_HOST` build-time vars,
    /// then empty, which keeps requests same-origin.
    pub fn load() -> Self {
        let compiled = option_env!("PREFABRICA_API_BASE_URL")
            .or(option_env!("PREFABRICA_API_HOST"))
            .unwrap_or("");

        let api_base_url = runtime_api_base_url()
            .or_else(|| non_empty(compiled))
            .unwrap_or_default();

        Self { api_base_url }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PREFABRICA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;
    non_empty(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_base_url() -> Option<String> {
    None
}

/// Trims a configured value, treating whitespace-only input as absent.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, non_empty};

    #[test]
    fn non_empty_trims_and_rejects_blank_values() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(
            non_empty("  https://api.prefabrica.cl "),
            Some("https://api.prefabrica.cl".to_string())
        );
    }

    #[test]
    fn load_without_overrides_keeps_requests_same_origin() {
        // Neither build-time var is set in the test build and there is no
        // window object, so the base URL stays empty.
        assert!(AppConfig::load().api_base_url.is_empty());
    }
}
