//! Main session service implementation

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, SignedClaims};
use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::{TokenCodec, TokenIssuer};

/// Session service for the full token lifecycle.
///
/// A refresh token is usable iff its signature is valid, its expiry has
/// not passed, and it is currently a member of the owning user's stored
/// set. The stored set is the single source of truth for session state;
/// this service holds no mutable state of its own.
pub struct AuthService<U, T>
where
    U: UserRepository + ?Sized,
    T: TokenRepository + ?Sized,
{
    /// External user store
    users: Arc<U>,
    /// External refresh-token store
    tokens: Arc<T>,
    /// Token pair issuer
    issuer: Arc<TokenIssuer>,
    /// Codec shared with the issuer, used on the verify paths
    codec: Arc<TokenCodec>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository + ?Sized,
    T: TokenRepository + ?Sized,
{
    /// Creates a new session service
    pub fn new(users: Arc<U>, tokens: Arc<T>, issuer: Arc<TokenIssuer>, codec: Arc<TokenCodec>) -> Self {
        Self {
            users,
            tokens,
            issuer,
            codec,
        }
    }

    /// Registers a new user and opens their first session.
    ///
    /// Fails with `Conflict` when the email or username is already taken.
    /// If the pair cannot be issued or the refresh token cannot be stored
    /// after the user record was created, the error is returned rather
    /// than a partial success; the degraded outcome (user without tokens)
    /// is logged, and the client recovers with a plain login.
    pub async fn register(&self, profile: NewUser) -> DomainResult<AuthResponse> {
        if self.users.exists(&profile.email, &profile.username).await? {
            return Err(DomainError::Conflict);
        }

        let user = self.users.create(profile).await?;
        let pair = match self.issuer.issue(&user) {
            Ok(pair) => pair,
            Err(e) => {
                warn!(
                    user_id = %user.id,
                    error = %e,
                    "user created but token issuance failed"
                );
                return Err(e);
            }
        };

        if let Err(e) = self.tokens.add_refresh_token(user.id, &pair.refresh_token).await {
            warn!(
                user_id = %user.id,
                error = %e,
                "user created but refresh token could not be stored"
            );
            return Err(e);
        }

        Ok(AuthResponse::from_parts(user, pair))
    }

    /// Logs a user in with a username-or-email identifier and password.
    ///
    /// Credential verification is delegated entirely to the user store;
    /// on its definitive failure the `InvalidCredentials` kind (and its
    /// single generic message) is returned unchanged. A failed last-login
    /// update is logged but never fails the login.
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self.users.authenticate(identifier, password).await?;

        let pair = self.issuer.issue(&user)?;
        self.tokens.add_refresh_token(user.id, &pair.refresh_token).await?;

        if let Err(e) = self.users.touch_last_login(user.id).await {
            warn!(user_id = %user.id, error = %e, "failed to record last login");
        }

        Ok(AuthResponse::from_parts(user, pair))
    }

    /// Exchanges a refresh token for a new pair, rotating it.
    ///
    /// Checks run in a fixed order so a caller always learns about token
    /// problems before account problems:
    /// 1. signature/expiry via the codec,
    /// 2. user resolves and is active,
    /// 3. the presented token is still a member of the stored set (the
    ///    replay-prevention check).
    ///
    /// Rotation is remove-then-add without a cross-request transaction;
    /// two concurrent refreshes of the same token may race, and at most
    /// one wins. A failed removal is logged and rotation proceeds, so a
    /// store hiccup cannot lock the user out.
    pub async fn refresh(&self, presented_token: &str) -> DomainResult<AuthResponse> {
        let claims = self.codec.verify::<RefreshClaims>(presented_token)?;

        let user = self.load_active_user(claims.claims.sub).await?;

        let stored = self.tokens.list_refresh_tokens(user.id).await?;
        if !stored.iter().any(|token| token == presented_token) {
            // Not recognized or already rotated away.
            return Err(DomainError::InvalidToken);
        }

        let pair = self.issuer.issue(&user)?;

        if let Err(e) = self.tokens.remove_refresh_token(user.id, presented_token).await {
            warn!(
                user_id = %user.id,
                error = %e,
                "failed to remove rotated refresh token; continuing with new token"
            );
        }
        self.tokens.add_refresh_token(user.id, &pair.refresh_token).await?;

        Ok(AuthResponse::from_parts(user, pair))
    }

    /// Ends one session by removing its refresh token.
    ///
    /// Idempotent: succeeds even when the token was already absent.
    pub async fn logout(&self, user_id: Uuid, refresh_token: &str) -> DomainResult<()> {
        self.tokens.remove_refresh_token(user_id, refresh_token).await
    }

    /// Ends every session for a user by clearing their stored set.
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<()> {
        self.tokens.remove_all_refresh_tokens(user_id).await
    }

    /// Verifies an access token and resolves its user.
    ///
    /// Stateless fast path: only signature and expiry are checked, never
    /// the stored set. The user must still resolve and be active.
    pub async fn verify_access_token(
        &self,
        presented_token: &str,
    ) -> DomainResult<(User, SignedClaims<AccessClaims>)> {
        let claims = self.codec.verify::<AccessClaims>(presented_token)?;
        let user = self.load_active_user(claims.claims.sub).await?;
        Ok((user, claims))
    }

    async fn load_active_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(DomainError::UserNotFound)
    }
}
