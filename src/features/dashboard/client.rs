//! Client helpers for the authenticated dashboard endpoints. These functions
//! keep endpoint paths centralized and assume the backend enforces
//! authorization.

use crate::{
    app_lib::AppError,
    features::{
        auth::{
            client::{get_json_authorized, Authorized},
            session::SessionStore,
        },
        dashboard::types::{AdminDashboard, UserDashboard},
    },
};

/// Fetches the signed-in user's dashboard greeting.
pub async fn fetch_user_dashboard(
    store: &SessionStore,
) -> Result<Authorized<UserDashboard>, AppError> {
    get_json_authorized(store, "/user-dashboard").await
}

/// Fetches the admin overview stats.
pub async fn fetch_admin_dashboard(
    store: &SessionStore,
) -> Result<Authorized<AdminDashboard>, AppError> {
    get_json_authorized(store, "/admin-dashboard").await
}

/// Fetches the registered usernames, admin only.
pub async fn list_users(store: &SessionStore) -> Result<Authorized<Vec<String>>, AppError> {
    get_json_authorized(store, "/users").await
}
