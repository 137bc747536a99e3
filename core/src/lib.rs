//! # TripWise Core
//!
//! Session and token lifecycle logic for the TripWise backend. This crate
//! contains the domain entities, the token codec and issuer, the
//! collaborator trait definitions for the external user store, and the
//! session service that orchestrates registration, login, refresh and
//! logout.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{AccessClaims, RefreshClaims, SignedClaims, TokenPair};
pub use domain::entities::user::{NewUser, User};
pub use domain::value_objects::AuthResponse;
pub use errors::{DomainError, DomainResult};
pub use repositories::{TokenRepository, UserRepository};
pub use services::auth::AuthService;
pub use services::token::{TokenCodec, TokenConfig, TokenIssuer};
