//! Token service module for JWT management
//!
//! This module handles signing and verification of access and refresh
//! tokens:
//! - `TokenCodec` signs and verifies claims payloads with an expiry
//! - `TokenIssuer` builds the access/refresh pair for a user identity
//! - `TokenConfig` carries the secret, algorithm and TTLs

mod codec;
mod config;
mod issuer;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use issuer::TokenIssuer;
