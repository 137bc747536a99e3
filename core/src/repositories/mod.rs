//! Collaborator trait definitions for the external user-record store.
//!
//! The session core depends on these interfaces but never implements
//! persistence itself; `tw_infra` provides the HTTP client implementation
//! and the `mock` modules provide in-memory fakes for tests.

pub mod token;
pub mod user;

pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
