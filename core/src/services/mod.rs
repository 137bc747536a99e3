//! Business services containing the session and token lifecycle logic.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use token::{TokenCodec, TokenConfig, TokenIssuer};
