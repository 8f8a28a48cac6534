use serde::{Deserialize, Serialize};

/// Greeting payload for the signed-in user's dashboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDashboard {
    pub message: String,
    pub username: String,
}

/// Overview payload for the admin page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub message: String,
    pub user_count: i64,
    pub admin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_dashboard_serialization() {
        let json = r#"{"message":"Welcome to admin dashboard","user_count":42,"admin":"root"}"#;
        let dashboard: AdminDashboard = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(dashboard.user_count, 42);
        assert_eq!(dashboard.admin, "root");

        let encoded = serde_json::to_string(&dashboard).expect("Failed to serialize");
        assert!(encoded.contains("Welcome to admin dashboard"));
    }

    #[test]
    fn test_user_dashboard_serialization() {
        let json = r#"{"message":"Welcome to user dashboard","username":"alice"}"#;
        let dashboard: UserDashboard = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(dashboard.username, "alice");
    }
}
