//! Domain-specific error types for session and token operations.
//!
//! Every fallible operation in this crate returns one of these kinds so
//! the HTTP facade can branch on the kind instead of parsing message text.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Bad signature, malformed token, expired token, or (refresh path
    /// only) a token that is no longer a member of the user's stored set.
    /// The message never reveals which check failed.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login failed. The message is identical whether the identifier or
    /// the password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration against an already-used email or username.
    #[error("Email or username already in use")]
    Conflict,

    /// Referenced user id does not resolve, or resolves to an inactive
    /// account.
    #[error("User not found or inactive")]
    UserNotFound,

    /// The external user store could not be reached or timed out. Distinct
    /// from the auth failures above so callers can retry or degrade.
    #[error("User store unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Missing or invalid signing configuration. Fatal at startup, not a
    /// per-request condition.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    /// Stable machine-readable tag for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidToken => "invalid_token",
            DomainError::InvalidCredentials => "invalid_credentials",
            DomainError::Conflict => "conflict",
            DomainError::UserNotFound => "user_not_found",
            DomainError::UpstreamUnavailable { .. } => "upstream_unavailable",
            DomainError::Configuration { .. } => "configuration_error",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
