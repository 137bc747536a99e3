//! Configuration for the token codec and issuer

use jsonwebtoken::Algorithm;

use tw_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_SECONDS};
use crate::errors::{DomainError, DomainResult};

/// Immutable signing configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared signing secret
    pub secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token TTL in seconds
    pub access_token_expiry: i64,
    /// Refresh token TTL in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry: ACCESS_TOKEN_EXPIRY_SECONDS,
            refresh_token_expiry: REFRESH_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl TokenConfig {
    /// Builds the signing configuration from the shared JWT config.
    ///
    /// Fails with a `Configuration` error when the algorithm name is not a
    /// supported HMAC variant; asymmetric algorithms would need key-file
    /// handling this deployment does not use.
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::Configuration {
                    message: format!("unsupported JWT algorithm: {other}"),
                })
            }
        };

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        })
    }
}
