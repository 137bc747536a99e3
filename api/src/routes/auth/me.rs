use actix_web::HttpResponse;

use crate::dto::UserDto;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /api/v1/auth/me
///
/// Returns the caller's user record as resolved during access-token
/// verification.
pub async fn me(caller: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(UserDto::from(caller.user))
}
