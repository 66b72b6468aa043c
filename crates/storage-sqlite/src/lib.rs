//! SQLite storage implementation for Hearth.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `hearth-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! All other crates are database-agnostic and work with traits.
//!
//! ```text
//! core (domain)        server (http)
//!       │                   │
//!       └─────────┬─────────┘
//!                 │
//!                 ▼
//!        storage-sqlite (this crate)
//!                 │
//!                 ▼
//!             SQLite DB
//! ```
//!
//! Reads go through an r2d2 pool; writes go through a single writer actor
//! that owns one connection and runs every job in an immediate transaction.
//! The actor is the serialization point that keeps read-modify-write
//! sequences (streak advancement in particular) free of lost updates.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod activities;
pub mod badges;
pub mod streaks;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from hearth-core for convenience
pub use hearth_core::errors::{DatabaseError, Error, Result};
