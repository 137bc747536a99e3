//! Bearer-token authentication extractor.

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};

use tw_core::domain::entities::token::{AccessClaims, SignedClaims};
use tw_core::domain::entities::user::User;
use tw_core::errors::DomainError;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// The authenticated caller of a protected route.
///
/// Extraction verifies the `Authorization: Bearer` access token through
/// the session service (signature, expiry, and an active user record) on
/// every protected request. Missing or invalid tokens produce a 401 with
/// the standard error body.
pub struct AuthenticatedUser {
    pub user: User,
    pub claims: SignedClaims<AccessClaims>,
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

fn domain_error_response(error: DomainError) -> actix_web::Error {
    let response = handle_domain_error(error);
    InternalError::from_response("authentication failed", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| domain_error_response(DomainError::Configuration {
                    message: "application state not configured".to_string(),
                }))?;

            let token =
                bearer_token(&req).ok_or_else(|| domain_error_response(DomainError::InvalidToken))?;

            match state.auth_service.verify_access_token(&token).await {
                Ok((user, claims)) => Ok(AuthenticatedUser { user, claims }),
                Err(error) => Err(domain_error_response(error)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let no_header = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&no_header), None);

        let wrong_scheme = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc"))
            .to_http_request();
        assert_eq!(bearer_token(&wrong_scheme), None);
    }
}
