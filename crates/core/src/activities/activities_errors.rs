//! Activity-specific error types.

use thiserror::Error;

/// Errors for activity operations.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Invalid category '{0}'")]
    InvalidCategory(String),

    #[error("Invalid activity date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid activity data: {0}")]
    InvalidData(String),
}
