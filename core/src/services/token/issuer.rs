//! Builds the access/refresh token pair for an authenticated identity.

use std::sync::Arc;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::DomainResult;

use super::codec::TokenCodec;
use super::config::TokenConfig;

/// Issues token pairs. The access token carries the profile claims a
/// protected request needs; the refresh token carries only the user id.
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    config: TokenConfig,
}

impl TokenIssuer {
    /// Creates an issuer sharing the given codec
    pub fn new(codec: Arc<TokenCodec>, config: TokenConfig) -> Self {
        Self { codec, config }
    }

    /// Issues an access/refresh pair for a user.
    ///
    /// `expires_in` on the returned pair is the access TTL; clients use it
    /// to schedule proactive refresh. Signing only fails on broken
    /// configuration, which is propagated as fatal.
    pub fn issue(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self
            .codec
            .sign(AccessClaims::for_user(user), self.config.access_token_expiry)?;
        let refresh_token = self
            .codec
            .sign(RefreshClaims::for_user(user.id), self.config.refresh_token_expiry)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
        ))
    }
}
