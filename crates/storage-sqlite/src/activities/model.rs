//! Database models for activities.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use hearth_core::activities::{Activity, Category, DATE_FORMAT};

/// Database model for a logged activity.
///
/// `date` is the canonical zero-padded ISO day so range scans can compare
/// it as text. `created_at` is an RFC3339 UTC timestamp.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ActivityDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub created_at: String,
}

// Conversion to domain models

impl From<ActivityDB> for Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            category: Category::from_str(&db.category).unwrap_or_else(|e| {
                log::error!("Failed to parse category '{}': {}", db.category, e);
                Category::Household
            }),
            description: db.description,
            date: NaiveDate::parse_from_str(&db.date, DATE_FORMAT).unwrap_or_else(|e| {
                log::error!("Failed to parse date '{}': {}", db.date, e);
                Utc::now().date_naive()
            }),
            created_at: chrono::DateTime::parse_from_rfc3339(&db.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|e| {
                    log::error!("Failed to parse created_at '{}': {}", db.created_at, e);
                    Utc::now()
                }),
        }
    }
}

impl From<Activity> for ActivityDB {
    fn from(domain: Activity) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            category: domain.category.as_db_str().to_string(),
            description: domain.description,
            date: domain.date.format(DATE_FORMAT).to_string(),
            created_at: domain.created_at.to_rfc3339(),
        }
    }
}
