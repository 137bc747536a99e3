//! Token entities for JWT-based authentication.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 1800;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 604_800;

/// A claims payload wrapped with its timing fields.
///
/// The codec adds `iat` and `exp` at signing time and returns them
/// alongside the embedded claims at verification time. `#[serde(flatten)]`
/// keeps the wire payload a single flat JSON object, so any claims type
/// round-trips through sign/verify unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedClaims<T> {
    #[serde(flatten)]
    pub claims: T,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,
}

impl<T> SignedClaims<T> {
    /// Checks whether the expiry timestamp has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims embedded in an access token.
///
/// Access tokens are stateless: validity is fully determined by signature
/// and expiry, so they carry the profile fields protected handlers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl AccessClaims {
    /// Builds access claims from a user record
    pub fn for_user(user: &User) -> Self {
        Self {
            sub: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Claims embedded in a refresh token.
///
/// Deliberately minimal: carrying no profile data means profile changes
/// never invalidate outstanding refresh tokens. The random `jti` keeps
/// two tokens minted within the same second distinct, which rotation
/// requires since the stored set matches on the exact token string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user id)
    pub sub: Uuid,
    /// Unique token id
    pub jti: Uuid,
}

impl RefreshClaims {
    /// Builds refresh claims for a user id
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            sub: user_id,
            jti: Uuid::new_v4(),
        }
    }
}

/// Token pair returned to the client after register, login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry in seconds. Clients use this to schedule
    /// proactive refresh; the refresh TTL is intentionally not exposed.
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_from_user() {
        let user = User::new("alice", "a@x.com");
        let claims = AccessClaims::for_user(&user);

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_refresh_claims_carry_no_profile_data() {
        let user_id = Uuid::new_v4();
        let claims = RefreshClaims::for_user(user_id);

        let json = serde_json::to_value(&claims).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["sub"], serde_json::json!(user_id));
        assert!(object.contains_key("jti"));
    }

    #[test]
    fn test_refresh_claims_are_unique_per_issue() {
        let user_id = Uuid::new_v4();
        assert_ne!(
            RefreshClaims::for_user(user_id),
            RefreshClaims::for_user(user_id)
        );
    }

    #[test]
    fn test_signed_claims_expiry() {
        let now = Utc::now().timestamp();
        let live = SignedClaims {
            claims: RefreshClaims::for_user(Uuid::new_v4()),
            iat: now,
            exp: now + 60,
        };
        let expired = SignedClaims {
            claims: RefreshClaims::for_user(Uuid::new_v4()),
            iat: now - 120,
            exp: now - 60,
        };

        assert!(!live.is_expired());
        assert!(expired.is_expired());
    }

    #[test]
    fn test_signed_claims_flatten_to_a_single_object() {
        let user = User::new("alice", "a@x.com");
        let signed = SignedClaims {
            claims: AccessClaims::for_user(&user),
            iat: 1,
            exp: 2,
        };

        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["sub"], serde_json::json!(user.id));
        assert_eq!(json["iat"], serde_json::json!(1));
        assert_eq!(json["exp"], serde_json::json!(2));
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 1800);

        assert_eq!(pair.access_token, "access");
        assert_eq!(pair.refresh_token, "refresh");
        assert_eq!(pair.expires_in, 1800);
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("a".to_string(), "r".to_string(), 1800);

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();

        assert_eq!(pair, deserialized);
    }
}
