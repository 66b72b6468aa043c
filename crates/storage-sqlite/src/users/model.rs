//! Database models for users.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::users::{NewUser, User};

/// Database model for a household member
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    pub created_at: String,
}

/// Database model for creating a new user
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: Option<String>,
    pub handle: String,
    pub display_name: String,
    pub created_at: String,
}

// Conversion to domain models

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            handle: db.handle,
            display_name: db.display_name,
            created_at: chrono::DateTime::parse_from_rfc3339(&db.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|e| {
                    log::error!("Failed to parse created_at '{}': {}", db.created_at, e);
                    Utc::now()
                }),
        }
    }
}

impl From<NewUser> for NewUserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            id: domain.id,
            handle: domain.handle,
            display_name: domain.display_name,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
