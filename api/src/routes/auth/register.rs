use actix_web::{web, HttpResponse};
use validator::Validate;

use tw_core::domain::entities::user::NewUser;

use crate::app::AppState;
use crate::dto::{AuthResponseDto, RegisterRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_error};

/// Handler for POST /api/v1/auth/register
///
/// Creates a user record in the external store and opens the first
/// session for it.
///
/// # Responses
/// - 201 Created: user plus token pair
/// - 400 Bad Request: invalid profile fields
/// - 409 Conflict: email or username already in use
/// - 503 Service Unavailable: user store unreachable
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    let request = request.into_inner();
    let profile = NewUser {
        username: request.username,
        email: request.email,
        password: request.password,
    };

    match state.auth_service.register(profile).await {
        Ok(response) => HttpResponse::Created().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
