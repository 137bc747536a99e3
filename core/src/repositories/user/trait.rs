//! User repository trait defining the session core's view of the external
//! user store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainResult;

/// The session core's only view onto user records.
///
/// Implementations talk to the external user-record store; every call must
/// be bounded by a timeout and report transport failures as
/// [`DomainError::UpstreamUnavailable`](crate::errors::DomainError), never
/// as an authentication failure.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user with the given email or username exists
    ///
    /// # Returns
    /// * `Ok(true)` - At least one of email/username is taken
    /// * `Ok(false)` - Both are free
    /// * `Err(DomainError)` - Store unreachable
    async fn exists(&self, email: &str, username: &str) -> DomainResult<bool>;

    /// Create a new user record
    ///
    /// The store hashes the password; the core never sees password
    /// material again after this call.
    ///
    /// # Returns
    /// * `Ok(User)` - The created record
    /// * `Err(DomainError::Conflict)` - Email or username already taken
    async fn create(&self, profile: NewUser) -> DomainResult<User>;

    /// Verify credentials against the store
    ///
    /// `identifier` may be a username or an email address. The store
    /// performs the password comparison; the core never compares hashes.
    ///
    /// # Returns
    /// * `Ok(User)` - Credentials are valid
    /// * `Err(DomainError::InvalidCredentials)` - Definitive failure, with
    ///   one message whether the identifier or the password was wrong
    async fn authenticate(&self, identifier: &str, password: &str) -> DomainResult<User>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Record a successful login timestamp on the user record
    async fn touch_last_login(&self, id: Uuid) -> DomainResult<()>;
}
