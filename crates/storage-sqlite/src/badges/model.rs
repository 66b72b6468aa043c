//! Database models for badges.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use hearth_core::badges::Badge;

/// Database model for an earned badge
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::badges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BadgeDB {
    pub id: String,
    pub user_id: String,
    pub badge_type: String,
    pub earned_at: String,
}

// Conversion to domain models

impl From<BadgeDB> for Badge {
    fn from(db: BadgeDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            badge_type: db.badge_type,
            earned_at: chrono::DateTime::parse_from_rfc3339(&db.earned_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|e| {
                    log::error!("Failed to parse earned_at '{}': {}", db.earned_at, e);
                    Utc::now()
                }),
        }
    }
}

impl From<Badge> for BadgeDB {
    fn from(domain: Badge) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            badge_type: domain.badge_type,
            earned_at: domain.earned_at.to_rfc3339(),
        }
    }
}
