use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::LogoutRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::AuthenticatedUser;

/// Handler for POST /api/v1/auth/logout
///
/// Ends the session owning the supplied refresh token. Idempotent: a
/// token that is already gone still yields 204.
pub async fn logout(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    request: web::Json<LogoutRequest>,
) -> HttpResponse {
    match state
        .auth_service
        .logout(caller.user.id, &request.refresh_token)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/logout-all
///
/// Clears every stored refresh token for the caller, ending all sessions
/// across devices.
pub async fn logout_all(state: web::Data<AppState>, caller: AuthenticatedUser) -> HttpResponse {
    match state.auth_service.logout_all(caller.user.id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
