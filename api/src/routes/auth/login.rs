use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{AuthResponseDto, LoginRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_error};

/// Handler for POST /api/v1/auth/login
///
/// Verifies credentials against the external store and opens a new
/// session. The 401 body is identical whether the identifier or the
/// password was wrong.
///
/// # Responses
/// - 200 OK: user plus token pair
/// - 401 Unauthorized: invalid credentials
/// - 503 Service Unavailable: user store unreachable
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .auth_service
        .login(&request.identifier, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
