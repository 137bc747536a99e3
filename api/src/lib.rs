//! # TripWise API
//!
//! actix-web facade for the session service: request DTOs, route
//! handlers, the bearer-token extractor, and the domain-error to
//! status-code mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure_app, AppState, DynAuthService};
