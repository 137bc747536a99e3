//! reqwest-based client for the user-record store.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use tw_core::domain::entities::user::{NewUser, User};
use tw_core::errors::{DomainError, DomainResult};
use tw_core::repositories::{TokenRepository, UserRepository};
use tw_shared::config::UserStoreConfig;

/// HTTP client for the external user store.
///
/// Implements both collaborator traits: the user records and their
/// refresh-token sub-resource live behind the same service. Every request
/// is bounded by the configured timeout; transport failures and unexpected
/// statuses surface as `UpstreamUnavailable` so callers never mistake an
/// outage for an authentication failure.
pub struct UserStoreClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

#[derive(Debug, Serialize)]
struct AuthenticateRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshTokenBody<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenListResponse {
    tokens: Vec<String>,
}

impl UserStoreClient {
    /// Builds the client from the store configuration
    pub fn new(config: &UserStoreConfig) -> DomainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Configuration {
                message: format!("failed to build user store client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(err: reqwest::Error) -> DomainError {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        DomainError::UpstreamUnavailable { message }
    }

    fn unexpected_status(status: StatusCode) -> DomainError {
        DomainError::UpstreamUnavailable {
            message: format!("user store returned {status}"),
        }
    }
}

#[async_trait]
impl UserRepository for UserStoreClient {
    async fn exists(&self, email: &str, username: &str) -> DomainResult<bool> {
        let response = self
            .http
            .get(self.url("/users/exists"))
            .query(&[("email", email), ("username", username)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::unexpected_status(response.status()));
        }

        let body: ExistsResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(body.exists)
    }

    async fn create(&self, profile: NewUser) -> DomainResult<User> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(&profile)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::CONFLICT => Err(DomainError::Conflict),
            status if status.is_success() => {
                let user: User = response.json().await.map_err(Self::transport_error)?;
                debug!(user_id = %user.id, "created user record");
                Ok(user)
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn authenticate(&self, identifier: &str, password: &str) -> DomainResult<User> {
        let response = self
            .http
            .post(self.url("/users/authenticate"))
            .json(&AuthenticateRequest {
                identifier,
                password,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            // The store answers 401 for unknown identifier and wrong
            // password alike; both collapse into the one generic kind.
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => {
                Err(DomainError::InvalidCredentials)
            }
            status if status.is_success() => {
                response.json().await.map_err(Self::transport_error)
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let response = self
            .http
            .get(self.url(&format!("/users/{id}")))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let user: User = response.json().await.map_err(Self::transport_error)?;
                Ok(Some(user))
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn touch_last_login(&self, id: Uuid) -> DomainResult<()> {
        let response = self
            .http
            .post(self.url(&format!("/users/{id}/last-login")))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::unexpected_status(response.status()))
        }
    }
}

#[async_trait]
impl TokenRepository for UserStoreClient {
    async fn add_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()> {
        let response = self
            .http
            .post(self.url(&format!("/users/{user_id}/refresh-tokens")))
            .json(&RefreshTokenBody { token })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::unexpected_status(response.status()))
        }
    }

    async fn list_refresh_tokens(&self, user_id: Uuid) -> DomainResult<Vec<String>> {
        let response = self
            .http
            .get(self.url(&format!("/users/{user_id}/refresh-tokens")))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            // An unknown user simply has no stored tokens.
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if status.is_success() => {
                let body: TokenListResponse =
                    response.json().await.map_err(Self::transport_error)?;
                Ok(body.tokens)
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn remove_refresh_token(&self, user_id: Uuid, token: &str) -> DomainResult<()> {
        let response = self
            .http
            .post(self.url(&format!("/users/{user_id}/refresh-tokens/remove")))
            .json(&RefreshTokenBody { token })
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            // Removal of an absent token is a successful no-op.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn remove_all_refresh_tokens(&self, user_id: Uuid) -> DomainResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/users/{user_id}/refresh-tokens")))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(Self::unexpected_status(status)),
        }
    }
}
