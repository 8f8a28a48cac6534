//! Backend endpoint resolution with an optional runtime override. The runtime
//! config is read from `window.FOYER_CONFIG` (if present) so static
//! deployments can change the API endpoint without rebuilding. When neither a
//! build-time nor a runtime value is set, the base URL is derived from the
//! page hostname: loopback hosts talk to the fixed local port, any other host
//! keeps its hostname with that same port.

/// Port the backend API listens on, independent of the serving host.
const API_PORT: u16 = 5000;

/// Frontend configuration resolved at load time.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from the build-time environment, applies the runtime
    /// override, and falls back to the hostname-derived default.
    pub fn load() -> Self {
        let mut api_base_url = option_env!("FOYER_API_BASE_URL")
            .unwrap_or("")
            .trim()
            .to_string();

        if let Some(value) = runtime_api_base_url() {
            api_base_url = value;
        }

        if api_base_url.is_empty() {
            api_base_url = api_base_for_host(&page_hostname().unwrap_or_default());
        }

        Self { api_base_url }
    }
}

/// Maps the page hostname to the backend base URL. Loopback hosts (and the
/// empty hostname outside a browser) use the fixed local port; any other host
/// keeps its hostname with the same port.
pub fn api_base_for_host(hostname: &str) -> String {
    let host = hostname.trim();
    if host.is_empty() || host == "localhost" || host == "127.0.0.1" {
        format!("http://localhost:{API_PORT}")
    } else {
        format!("http://{host}:{API_PORT}")
    }
}

#[cfg(target_arch = "wasm32")]
fn page_hostname() -> Option<String> {
    web_sys::window().and_then(|window| window.location().hostname().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_hostname() -> Option<String> {
    None
}

fn runtime_api_base_url() -> Option<String> {
    raw_runtime_value().and_then(|value| normalize_runtime_value(&value))
}

#[cfg(target_arch = "wasm32")]
fn raw_runtime_value() -> Option<String> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FOYER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);
    Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_runtime_value() -> Option<String> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{api_base_for_host, normalize_runtime_value};

    #[test]
    fn loopback_hosts_map_to_the_fixed_local_port() {
        assert_eq!(api_base_for_host("localhost"), "http://localhost:5000");
        assert_eq!(api_base_for_host("127.0.0.1"), "http://localhost:5000");
    }

    #[test]
    fn empty_hostname_falls_back_to_loopback() {
        assert_eq!(api_base_for_host(""), "http://localhost:5000");
        assert_eq!(api_base_for_host("   "), "http://localhost:5000");
    }

    #[test]
    fn other_hosts_keep_their_hostname_and_port() {
        assert_eq!(
            api_base_for_host("auth.example.com"),
            "http://auth.example.com:5000"
        );
        assert_eq!(api_base_for_host("10.0.0.7"), "http://10.0.0.7:5000");
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://auth.internal:5000 "),
            Some("http://auth.internal:5000".to_string())
        );
    }
}
