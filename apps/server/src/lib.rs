//! Library surface of the Hearth server, re-exported for integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod main_lib;
pub mod scheduler;

pub use main_lib::{build_state, init_tracing, AppState};
