//! HTTP helpers for the backend JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup and to enforce a predictable timeout policy. The helpers do not read
//! or store tokens; they only attach headers provided by callers.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Sends a GET and returns the raw response. Headers are applied in order, so
/// later entries win on name conflicts.
pub async fn send_get(path: &str, headers: &[(String, String)]) -> Result<Response, AppError> {
    let url = build_url(path);
    send_with_timeout(|signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Posts a JSON body and returns the raw response. A JSON content type is set
/// first, so caller headers can still override it.
pub async fn send_post_json<B: Serialize>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Posts an empty body and returns the raw response.
pub async fn send_post_empty(
    path: &str,
    headers: &[(String, String)],
) -> Result<Response, AppError> {
    let url = build_url(path);
    send_with_timeout(move |signal| {
        let mut builder = Request::post(&url).abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Fetches JSON from an unauthenticated endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = send_get(path, &[]).await?;
    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses; non-success statuses surface the server's message.
pub async fn handle_json_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: error_body_message(&body),
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Extracts the server's `message` field from an error body, falling back to
/// a sanitized excerpt of the raw text.
pub fn error_body_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.trim().is_empty() => parsed.message,
        _ => sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, error_body_message, sanitize_body, MAX_ERROR_CHARS};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("http://localhost:5000", "/login"),
            "http://localhost:5000/login"
        );
        assert_eq!(
            build_url_with_base("http://localhost:5000/", "login"),
            "http://localhost:5000/login"
        );
        assert_eq!(build_url_with_base("", "/login"), "/login");
    }

    #[test]
    fn error_body_message_prefers_the_message_field() {
        assert_eq!(
            error_body_message(r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(
            error_body_message(r#"{"message":"Registration failed","code":7}"#),
            "Registration failed"
        );
    }

    #[test]
    fn error_body_message_falls_back_to_the_raw_body() {
        assert_eq!(error_body_message("upstream exploded"), "upstream exploded");
        assert_eq!(error_body_message(r#"{"message":"  "}"#), r#"{"message":"  "}"#);
        assert_eq!(error_body_message(""), "Request failed.");
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(&long).chars().count(), MAX_ERROR_CHARS);
    }
}
