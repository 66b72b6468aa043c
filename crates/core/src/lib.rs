//! Hearth Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Hearth, a household
//! activity tracker. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod activities;
pub mod badges;
pub mod constants;
pub mod errors;
pub mod events;
pub mod stats;
pub mod streaks;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
