//! In-memory implementation of `UserRepository` for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{DomainError, DomainResult};

use super::r#trait::UserRepository;

/// Mock user store backed by a `HashMap`.
///
/// Passwords are kept in plain text here; real stores hash them. Only for
/// tests.
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, (User, String)>>>,
}

impl MockUserRepository {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with the given password, returning the record
    pub async fn insert(&self, user: User, password: impl Into<String>) -> User {
        let mut users = self.users.write().await;
        users.insert(user.id, (user.clone(), password.into()));
        user
    }

    /// Mark a user inactive
    pub async fn deactivate(&self, id: Uuid) {
        let mut users = self.users.write().await;
        if let Some((user, _)) = users.get_mut(&id) {
            user.deactivate();
        }
    }

    /// Remove a user record entirely
    pub async fn remove(&self, id: Uuid) {
        let mut users = self.users.write().await;
        users.remove(&id);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn exists(&self, email: &str, username: &str) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|(user, _)| user.email == email || user.username == username))
    }

    async fn create(&self, profile: NewUser) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|(user, _)| user.email == profile.email || user.username == profile.username)
        {
            return Err(DomainError::Conflict);
        }

        let user = User::new(profile.username, profile.email);
        users.insert(user.id, (user.clone(), profile.password));
        Ok(user)
    }

    async fn authenticate(&self, identifier: &str, password: &str) -> DomainResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|(user, stored_password)| {
                (user.username == identifier || user.email == identifier)
                    && stored_password == password
                    && user.is_active
            })
            .map(|(user, _)| user.clone())
            .ok_or(DomainError::InvalidCredentials)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(|(user, _)| user.clone()))
    }

    async fn touch_last_login(&self, id: Uuid) -> DomainResult<()> {
        let mut users = self.users.write().await;
        if let Some((user, _)) = users.get_mut(&id) {
            user.update_last_login();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_authenticate() {
        let repo = MockUserRepository::new();
        let user = repo
            .create(NewUser {
                username: "alice".into(),
                email: "a@x.com".into(),
                password: "Secret123".into(),
            })
            .await
            .unwrap();

        let found = repo.authenticate("alice", "Secret123").await.unwrap();
        assert_eq!(found.id, user.id);

        let by_email = repo.authenticate("a@x.com", "Secret123").await.unwrap();
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let repo = MockUserRepository::new();
        repo.insert(User::new("alice", "a@x.com"), "pw").await;

        let result = repo
            .create(NewUser {
                username: "alice".into(),
                email: "other@x.com".into(),
                password: "pw".into(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Conflict)));
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_authenticate() {
        let repo = MockUserRepository::new();
        let user = repo.insert(User::new("alice", "a@x.com"), "pw").await;
        repo.deactivate(user.id).await;

        let result = repo.authenticate("alice", "pw").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_touch_last_login() {
        let repo = MockUserRepository::new();
        let user = repo.insert(User::new("alice", "a@x.com"), "pw").await;

        repo.touch_last_login(user.id).await.unwrap();

        let updated = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(updated.last_login_at.is_some());
    }
}
