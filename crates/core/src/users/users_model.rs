//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a household member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique lowercase handle, e.g. "vlad".
    pub handle: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub handle: String,
    pub display_name: String,
}

impl NewUser {
    /// Builds the seed input for a roster display name. The handle is the
    /// lowercased display name.
    pub fn from_display_name(display_name: &str) -> Self {
        Self {
            id: None,
            handle: display_name.to_lowercase(),
            display_name: display_name.to_string(),
        }
    }

    /// Validates the new user data.
    pub fn validate(&self) -> Result<()> {
        if self.handle.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Handle cannot be empty".to_string(),
            )));
        }
        if self.handle != self.handle.to_lowercase() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Handle must be lowercase".to_string(),
            )));
        }
        if self.display_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Display name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
