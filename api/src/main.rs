use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use tw_api::app::{configure_app, AppState};
use tw_api::middleware::create_cors;
use tw_core::errors::DomainError;
use tw_core::repositories::{TokenRepository, UserRepository};
use tw_core::services::auth::AuthService;
use tw_core::services::token::{TokenCodec, TokenConfig, TokenIssuer};
use tw_infra::UserStoreClient;
use tw_shared::config::{JwtConfig, ServerConfig, UserStoreConfig};

fn configuration_error(error: DomainError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting TripWise auth API");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }
    let server_config = ServerConfig::from_env();
    let store_config = UserStoreConfig::from_env();

    // Signing configuration problems are fatal here, never per-request.
    let token_config = TokenConfig::from_jwt_config(&jwt_config).map_err(configuration_error)?;
    let codec = Arc::new(TokenCodec::new(&token_config).map_err(configuration_error)?);
    let issuer = Arc::new(TokenIssuer::new(codec.clone(), token_config));

    let store = Arc::new(UserStoreClient::new(&store_config).map_err(configuration_error)?);
    let users: Arc<dyn UserRepository> = store.clone();
    let tokens: Arc<dyn TokenRepository> = store;

    let auth_service = Arc::new(AuthService::new(users, tokens, issuer, codec));
    let state = web::Data::new(AppState::new(auth_service));

    let bind_address = server_config.bind_address();
    info!(%bind_address, user_store = %store_config.base_url, "server configured");

    let frontend_origin = server_config.frontend_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(create_cors(&frontend_origin))
            .configure(configure_app)
    })
    .bind(bind_address)?
    .run()
    .await
}
