//! Session service module
//!
//! Orchestrates registration, login, refresh-token rotation, logout and
//! access-token verification against the external user store.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
