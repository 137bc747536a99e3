//! Application state and route wiring.

use std::sync::Arc;

use actix_web::web;

use tw_core::repositories::{TokenRepository, UserRepository};
use tw_core::services::auth::AuthService;

use crate::routes;

/// Session service over trait-object collaborators, so handlers need no
/// type parameters.
pub type DynAuthService = AuthService<dyn UserRepository, dyn TokenRepository>;

/// Shared application state injected into every handler.
pub struct AppState {
    pub auth_service: Arc<DynAuthService>,
}

impl AppState {
    /// Creates the state from a constructed session service
    pub fn new(auth_service: Arc<DynAuthService>) -> Self {
        Self { auth_service }
    }
}

/// Mounts all routes under `/api/v1`.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(routes::health::health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(routes::auth::register::register))
                    .route("/login", web::post().to(routes::auth::login::login))
                    .route("/refresh", web::post().to(routes::auth::refresh::refresh))
                    .route("/logout", web::post().to(routes::auth::logout::logout))
                    .route(
                        "/logout-all",
                        web::post().to(routes::auth::logout::logout_all),
                    )
                    .route("/me", web::get().to(routes::auth::me::me)),
            ),
    );
}
