//! Client-side session persistence. All access to the stored token goes
//! through [`SessionStore`] so the three fields are always written and
//! cleared together; no other code touches the storage keys directly.

use crate::features::auth::types::UserType;

pub const TOKEN_KEY: &str = "authToken";
pub const USERNAME_KEY: &str = "username";
pub const USER_TYPE_KEY: &str = "userType";

/// The signed-in user as persisted in the browser: bearer token, username,
/// and role. Contains the raw token; never log it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub user_type: UserType,
}

impl Session {
    /// Assembles a session only when every field is present and the role
    /// parses. A token without its paired username and role is treated as
    /// absent.
    pub fn from_parts(
        token: Option<String>,
        username: Option<String>,
        user_type: Option<String>,
    ) -> Option<Self> {
        let token = token?;
        let username = username?;
        let user_type = UserType::parse(&user_type?)?;
        Some(Self {
            token,
            username,
            user_type,
        })
    }
}

/// Owned handle over the browser's key-value storage for the session entity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    pub const fn new() -> Self {
        Self
    }

    /// Reads the stored session, or `None` when any field is missing or
    /// malformed.
    pub fn load(&self) -> Option<Session> {
        let storage = local_storage()?;
        Session::from_parts(
            storage.get_item(TOKEN_KEY).ok().flatten(),
            storage.get_item(USERNAME_KEY).ok().flatten(),
            storage.get_item(USER_TYPE_KEY).ok().flatten(),
        )
    }

    /// Writes all three session fields together.
    pub fn save(&self, session: &Session) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
            let _ = storage.set_item(USER_TYPE_KEY, session.user_type.as_str());
        }
    }

    /// Removes all three session fields together.
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
            let _ = storage.remove_item(USER_TYPE_KEY);
        }
    }

    /// Returns the bearer token when a complete session is stored.
    pub fn token(&self) -> Option<String> {
        self.load().map(|session| session.token)
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::features::auth::types::UserType;

    #[test]
    fn from_parts_requires_every_field() {
        assert_eq!(Session::from_parts(None, None, None), None);
        assert_eq!(
            Session::from_parts(Some("abc123".to_string()), None, Some("user".to_string())),
            None
        );
        assert_eq!(
            Session::from_parts(
                Some("abc123".to_string()),
                Some("alice".to_string()),
                None
            ),
            None
        );
    }

    #[test]
    fn from_parts_rejects_unknown_roles() {
        assert_eq!(
            Session::from_parts(
                Some("abc123".to_string()),
                Some("alice".to_string()),
                Some("superuser".to_string())
            ),
            None
        );
    }

    #[test]
    fn from_parts_builds_a_complete_session() {
        let session = Session::from_parts(
            Some("abc123".to_string()),
            Some("alice".to_string()),
            Some("admin".to_string()),
        )
        .expect("complete parts should assemble");
        assert_eq!(session.token, "abc123");
        assert_eq!(session.username, "alice");
        assert_eq!(session.user_type, UserType::Admin);
    }
}
