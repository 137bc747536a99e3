//! HTTP bindings for the external user store.

mod client;

pub use client::UserStoreClient;
