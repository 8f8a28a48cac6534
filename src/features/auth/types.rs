//! Request and response types for auth-related API calls. Responses carry
//! bearer tokens, so they must never be logged.

use crate::routes::paths;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub message: String,
}

/// Admin login succeeds without a display message; anything extra the server
/// sends is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifySessionResponse {
    pub valid: bool,
}

/// Role discriminator deciding which home page a signed-in user lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    User,
    Admin,
}

impl UserType {
    /// Stable string form used as the persisted storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(UserType::User),
            "admin" => Some(UserType::Admin),
            _ => None,
        }
    }

    /// Page a user of this role is sent to after signing in.
    pub fn home_path(self) -> &'static str {
        match self {
            UserType::User => paths::DASHBOARD,
            UserType::Admin => paths::ADMIN,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_serialization() {
        let json = r#"{"token":"abc123","username":"alice","message":"Login successful"}"#;
        let response: LoginResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.token, "abc123");
        assert_eq!(response.username, "alice");
        assert_eq!(response.message, "Login successful");
    }

    #[test]
    fn admin_login_response_ignores_extra_fields() {
        let json = r#"{"token":"abc123","username":"admin","message":"Admin Login successful"}"#;
        let response: AdminLoginResponse =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.token, "abc123");
        assert_eq!(response.username, "admin");
    }

    #[test]
    fn credentials_serialize_with_plain_field_names() {
        let credentials = Credentials {
            username: "bob".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&credentials).expect("Failed to serialize");
        assert!(json.contains(r#""username":"bob""#));
        assert!(json.contains(r#""password":"hunter2""#));
    }

    #[test]
    fn user_type_round_trips_through_its_string_form() {
        for user_type in [UserType::User, UserType::Admin] {
            assert_eq!(UserType::parse(user_type.as_str()), Some(user_type));
        }
        assert_eq!(UserType::parse("operator"), None);
        assert_eq!(UserType::parse(""), None);
    }

    #[test]
    fn user_type_serde_matches_the_storage_form() {
        assert_eq!(
            serde_json::to_string(&UserType::Admin).expect("Failed to serialize"),
            r#""admin""#
        );
        let parsed: UserType = serde_json::from_str(r#""user""#).expect("Failed to deserialize");
        assert_eq!(parsed, UserType::User);
    }

    #[test]
    fn home_path_depends_on_role() {
        assert_eq!(UserType::User.home_path(), "/dashboard");
        assert_eq!(UserType::Admin.home_path(), "/admin");
    }
}
