//! Value objects returned by the session service.

pub mod auth_response;

pub use auth_response::AuthResponse;
