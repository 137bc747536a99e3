//! Environment-driven configuration.
//!
//! All configuration is read once at startup and passed into services as
//! immutable structs; business logic never reads the process environment.

pub mod auth;
pub mod server;
pub mod store;

pub use auth::JwtConfig;
pub use server::ServerConfig;
pub use store::UserStoreConfig;
