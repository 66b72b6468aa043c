//! Derived view models.
//!
//! Nothing in this module is persisted. Every value is computed on demand
//! from the activity log and badge store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary block for one user, shaped for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Distinct categories logged on the day, e.g. "4/6".
    pub today_progress: String,
    /// Days with at least one activity in the week, e.g. "5/7 days".
    pub weekly_score: String,
    /// Total badge rows for the user.
    pub badges_earned: i64,
}

/// One day of the weekly progress grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGridEntry {
    pub date: NaiveDate,
    /// Distinct categories logged on the day; zero when nothing was logged.
    pub category_count: usize,
}
