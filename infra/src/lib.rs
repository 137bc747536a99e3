//! # TripWise Infrastructure
//!
//! Implementations of the `tw_core` collaborator traits against external
//! services. Currently this is a single HTTP client for the user-record
//! store, which also owns the per-user refresh-token sub-resource.

pub mod http;

pub use http::UserStoreClient;
