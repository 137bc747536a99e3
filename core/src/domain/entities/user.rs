//! User identity as read from the external user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record owned by the external user store.
///
/// The session core only reads these records; creation and mutation happen
/// in the store behind the [`UserRepository`](crate::repositories::UserRepository)
/// trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Role tag, e.g. "user" or "admin"
    pub role: String,

    /// Inactive accounts cannot authenticate or refresh
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new active user with the default role.
    ///
    /// Used by mock repositories and tests; production records come from
    /// the external store.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            role: String::from("user"),
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }
}

/// Profile supplied at registration time.
///
/// The password travels to the external store for hashing; the session
/// core never compares or stores password material itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new("alice", "a@x.com");
        assert!(user.is_active);
        assert_eq!(user.role, "user");
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new("alice", "a@x.com");
        user.deactivate();
        assert!(!user.is_active);
    }

    #[test]
    fn test_update_last_login() {
        let mut user = User::new("alice", "a@x.com");
        user.update_last_login();
        assert!(user.last_login_at.is_some());
    }
}
