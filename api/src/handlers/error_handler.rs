//! Maps domain error kinds to HTTP responses.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use tw_core::errors::DomainError;
use tw_shared::types::ErrorResponse;

/// Translates a `DomainError` into a status code and error body.
///
/// The body carries only the error's own message, which is already
/// scrubbed: credential failures share one message, token failures never
/// say which check failed.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = match &error {
        DomainError::InvalidToken | DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::Conflict => StatusCode::CONFLICT,
        DomainError::UserNotFound => StatusCode::NOT_FOUND,
        DomainError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    match &error {
        DomainError::UpstreamUnavailable { message } => {
            warn!(%message, "user store unavailable");
        }
        DomainError::Configuration { message } => {
            error!(%message, "configuration error surfaced at request time");
        }
        _ => {}
    }

    HttpResponse::build(status).json(ErrorResponse::new(error.code(), error.to_string()))
}

/// 400 response for request-body validation failures.
pub fn handle_validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        errors.to_string(),
    ))
}
