//! Token repository trait defining the per-user refresh-token set.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// The core's only view onto refresh-token persistence.
///
/// A refresh token is honored only while present in its owner's stored
/// set; removal is how rotation, logout and logout-all invalidate tokens.
/// All operations are idempotent from the core's perspective.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Add a token to the user's stored set
    async fn add_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()>;

    /// List the user's currently stored tokens
    async fn list_refresh_tokens(&self, user_id: Uuid) -> DomainResult<Vec<String>>;

    /// Remove one token from the user's set. Must succeed (as a no-op)
    /// when the token is already absent.
    async fn remove_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()>;

    /// Clear the user's entire set (logout from all devices)
    async fn remove_all_refresh_tokens(&self, user_id: Uuid) -> DomainResult<()>;
}
