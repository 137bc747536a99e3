//! # TripWise Shared
//!
//! Configuration structs and common API types shared across the TripWise
//! backend crates.

pub mod config;
pub mod types;
