use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{AuthResponseDto, RefreshTokenRequest};
use crate::handlers::error_handler::handle_domain_error;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new pair; the presented token is
/// rotated out and cannot be used again.
///
/// # Responses
/// - 200 OK: new token pair
/// - 401 Unauthorized: invalid, expired, or already-used refresh token
/// - 404 Not Found: token owner no longer resolves to an active account
/// - 503 Service Unavailable: user store unreachable
pub async fn refresh(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
