//! In-memory implementation of `TokenRepository` for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainResult;

use super::r#trait::TokenRepository;

/// Mock refresh-token store keyed by user id.
#[derive(Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, Vec<String>>>>,
}

impl MockTokenRepository {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens currently stored for a user
    pub async fn count_for_user(&self, user_id: Uuid) -> usize {
        let tokens = self.tokens.read().await;
        tokens.get(&user_id).map_or(0, |set| set.len())
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn add_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()> {
        let mut tokens = self.tokens.write().await;
        let set = tokens.entry(user_id).or_default();
        if !set.iter().any(|stored| stored == token) {
            set.push(token.to_string());
        }
        Ok(())
    }

    async fn list_refresh_tokens(&self, user_id: Uuid) -> DomainResult<Vec<String>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&user_id).cloned().unwrap_or_default())
    }

    async fn remove_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()> {
        let mut tokens = self.tokens.write().await;
        if let Some(set) = tokens.get_mut(&user_id) {
            set.retain(|stored| stored != token);
        }
        Ok(())
    }

    async fn remove_all_refresh_tokens(&self, user_id: Uuid) -> DomainResult<()> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.add_refresh_token(user_id, "t1").await.unwrap();
        repo.add_refresh_token(user_id, "t2").await.unwrap();

        let stored = repo.list_refresh_tokens(user_id).await.unwrap();
        assert_eq!(stored, vec!["t1".to_string(), "t2".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.add_refresh_token(user_id, "t1").await.unwrap();
        repo.remove_refresh_token(user_id, "t1").await.unwrap();
        // Removing an absent token must still succeed.
        repo.remove_refresh_token(user_id, "t1").await.unwrap();

        assert_eq!(repo.count_for_user(user_id).await, 0);
    }

    #[tokio::test]
    async fn test_remove_all() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.add_refresh_token(user_id, "t1").await.unwrap();
        repo.add_refresh_token(user_id, "t2").await.unwrap();
        repo.remove_all_refresh_tokens(user_id).await.unwrap();

        assert!(repo.list_refresh_tokens(user_id).await.unwrap().is_empty());
    }
}
