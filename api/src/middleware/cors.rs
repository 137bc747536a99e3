//! CORS configuration for the frontend origin.

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS policy allowing the configured frontend origin.
pub fn create_cors(frontend_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(frontend_origin)
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
