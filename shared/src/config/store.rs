//! External user store configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the external user-record store.
///
/// Every call to the store is bounded by `timeout_secs`; a timed-out call
/// is reported as an upstream failure, never as an authentication failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserStoreConfig {
    /// Base URL of the user store service, e.g. `http://localhost:5001`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UserStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:5001"),
            timeout_secs: 5,
        }
    }
}

impl UserStoreConfig {
    /// Create from environment variables (`USER_STORE_URL`,
    /// `USER_STORE_TIMEOUT_SECS`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("USER_STORE_URL")
                .unwrap_or(defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: std::env::var("USER_STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
