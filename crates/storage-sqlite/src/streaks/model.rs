//! Database models for streaks.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;
use hearth_core::activities::DATE_FORMAT;
use hearth_core::streaks::Streak;

/// Database model for per-user streak counters. One row per user, keyed by
/// `user_id`.
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
#[diesel(table_name = crate::schema::streaks)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StreakDB {
    pub user_id: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<String>,
}

// Conversion to domain models

impl From<StreakDB> for Streak {
    fn from(db: StreakDB) -> Self {
        Self {
            user_id: db.user_id,
            current_streak: db.current_streak,
            longest_streak: db.longest_streak,
            last_activity_date: db.last_activity_date.as_deref().and_then(|stored| {
                NaiveDate::parse_from_str(stored, DATE_FORMAT)
                    .map_err(|e| {
                        log::error!("Failed to parse last_activity_date '{}': {}", stored, e);
                        e
                    })
                    .ok()
            }),
        }
    }
}

impl From<Streak> for StreakDB {
    fn from(domain: Streak) -> Self {
        Self {
            user_id: domain.user_id,
            current_streak: domain.current_streak,
            longest_streak: domain.longest_streak,
            last_activity_date: domain
                .last_activity_date
                .map(|day| day.format(DATE_FORMAT).to_string()),
        }
    }
}
