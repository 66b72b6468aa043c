//! Badge domain models.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::activities::Category;
use crate::streaks::Streak;
use crate::utils::time_utils::{local_date_from_utc, Tz};

/// A permanent achievement record. Append-only; never revoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub user_id: String,
    pub badge_type: String,
    /// Award instant. Its calendar day in the household timezone is the day
    /// the badge was earned for, backfilled awards included.
    pub earned_at: DateTime<Utc>,
}

/// Snapshot a badge rule is judged against: one user's day plus their
/// current streak and previously earned badges.
#[derive(Debug, Clone)]
pub struct BadgeContext {
    pub user_id: String,
    pub date: NaiveDate,
    pub categories_today: HashSet<Category>,
    pub streak: Streak,
    pub existing_badges: Vec<Badge>,
    /// Timezone that turns award timestamps into calendar days.
    pub tz: Tz,
}

impl BadgeContext {
    /// True when the user already holds any badge of this type.
    pub fn holds(&self, badge_type: &str) -> bool {
        self.existing_badges
            .iter()
            .any(|badge| badge.badge_type == badge_type)
    }

    /// True when the user holds a badge of this type whose award day equals
    /// `self.date`.
    pub fn holds_on_date(&self, badge_type: &str) -> bool {
        self.existing_badges.iter().any(|badge| {
            badge.badge_type == badge_type
                && local_date_from_utc(badge.earned_at, self.tz) == self.date
        })
    }
}
