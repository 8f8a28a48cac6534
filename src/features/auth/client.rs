//! Client wrappers for the auth API endpoints. These helpers centralize
//! bearer-header handling and session-aware requests, keeping auth flows
//! consistent and preventing token leakage in route code.

use crate::{
    app_lib::{api, AppError},
    features::auth::{
        session::{Session, SessionStore},
        types::{
            AdminLoginResponse, Credentials, LoginResponse, MessageResponse, UserType,
            VerifySessionResponse,
        },
    },
};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Outcome of a request sent with session credentials attached.
///
/// `SessionExpired` means the backend rejected the token: the stored session
/// has already been cleared and the browser sent to the landing page, so
/// callers stop processing instead of rendering a result.
#[derive(Clone, Debug)]
pub enum Authorized<T> {
    Granted(T),
    SessionExpired,
}

/// A successful user login: the session to persist plus the server's
/// display message.
#[derive(Clone, Debug)]
pub struct LoginSuccess {
    pub session: Session,
    pub message: String,
}

/// Outcome of a registration attempt. The server message is surfaced either
/// way; only `Accepted` redirects back to the landing page.
#[derive(Clone, Debug)]
pub enum Registration {
    Accepted { message: String },
    Rejected { message: String },
}

/// Exchanges credentials for a user session. Validation happens on the
/// backend; a rejection surfaces the server's message.
pub async fn login(credentials: &Credentials) -> Result<LoginSuccess, AppError> {
    let response = api::send_post_json("/login", credentials, &[]).await?;
    let body: LoginResponse = api::handle_json_response(response).await?;
    Ok(LoginSuccess {
        session: Session {
            token: body.token,
            username: body.username,
            user_type: UserType::User,
        },
        message: body.message,
    })
}

/// Exchanges credentials for an admin session. No display message on
/// success.
pub async fn admin_login(credentials: &Credentials) -> Result<Session, AppError> {
    let response = api::send_post_json("/admin-login", credentials, &[]).await?;
    let body: AdminLoginResponse = api::handle_json_response(response).await?;
    Ok(Session {
        token: body.token,
        username: body.username,
        user_type: UserType::Admin,
    })
}

/// Submits a registration. The server's message is returned for both
/// accepted and rejected attempts.
pub async fn register(credentials: &Credentials) -> Result<Registration, AppError> {
    let response = api::send_post_json("/register", credentials, &[]).await?;
    if response.ok() {
        let body: MessageResponse = api::handle_json_response(response).await?;
        Ok(Registration::Accepted {
            message: body.message,
        })
    } else {
        let body = response.text().await.unwrap_or_default();
        Ok(Registration::Rejected {
            message: api::error_body_message(&body),
        })
    }
}

/// Best-effort server-side logout followed by an unconditional local wipe.
/// A failed network call is logged, never surfaced.
pub async fn logout(store: &SessionStore) {
    if let Some(token) = store.token() {
        let mut headers = bearer_headers(&token);
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        if let Err(err) = api::send_post_empty("/logout", &headers).await {
            log::warn!("logout request failed: {err}");
        }
    }
    store.clear();
}

/// Checks the stored token against the backend.
///
/// Missing token: invalid without a network call. Non-success response:
/// invalid and the store is cleared. Transport failure: invalid, but the
/// store is left untouched.
pub async fn verify_session(store: &SessionStore) -> bool {
    let Some(token) = store.token() else {
        return false;
    };

    match api::send_get("/verify-session", &bearer_headers(&token)).await {
        Ok(response) if response.ok() => match response.json::<VerifySessionResponse>().await {
            Ok(body) => body.valid,
            Err(err) => {
                log::error!("session verification returned a malformed body: {err}");
                false
            }
        },
        Ok(_) => {
            store.clear();
            false
        }
        Err(err) => {
            log::error!("session verification failed: {err}");
            false
        }
    }
}

/// Sends a GET with session credentials attached. The JSON content type and
/// bearer header are applied first, so caller-supplied headers win on
/// conflict. A 401 wipes the stored session and sends the browser to the
/// landing page.
pub async fn send_authorized_get(
    store: &SessionStore,
    path: &str,
    headers: &[(String, String)],
) -> Result<Authorized<Response>, AppError> {
    let mut merged = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(token) = store.token() {
        merged.extend(bearer_headers(&token));
    }
    merged.extend_from_slice(headers);

    let response = api::send_get(path, &merged).await?;
    if response.status() == 401 {
        store.clear();
        redirect_to_landing();
        return Ok(Authorized::SessionExpired);
    }
    Ok(Authorized::Granted(response))
}

/// Fetches JSON from an authenticated endpoint through
/// [`send_authorized_get`].
pub async fn get_json_authorized<T: DeserializeOwned>(
    store: &SessionStore,
    path: &str,
) -> Result<Authorized<T>, AppError> {
    match send_authorized_get(store, path, &[]).await? {
        Authorized::SessionExpired => Ok(Authorized::SessionExpired),
        Authorized::Granted(response) => api::handle_json_response(response)
            .await
            .map(Authorized::Granted),
    }
}

fn bearer_headers(token: &str) -> Vec<(String, String)> {
    vec![("Authorization".to_string(), format!("Bearer {token}"))]
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_landing() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::routes::paths::LANDING);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_landing() {}
