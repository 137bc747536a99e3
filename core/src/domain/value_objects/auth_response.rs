//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Result of a successful register, login or refresh: the user record plus
/// a freshly issued token pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user
    pub user: User,

    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new token pairs
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a user and token pair
    pub fn from_parts(user: User, pair: TokenPair) -> Self {
        Self {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let user = User::new("alice", "a@x.com");
        let pair = TokenPair::new("access".into(), "refresh".into(), 1800);

        let response = AuthResponse::from_parts(user.clone(), pair);

        assert_eq!(response.user, user);
        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.expires_in, 1800);
    }
}
