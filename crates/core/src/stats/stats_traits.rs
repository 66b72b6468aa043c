//! Aggregation service trait.

use chrono::NaiveDate;

use super::stats_model::{UserStats, WeekGridEntry};
use crate::errors::Result;

/// Trait defining the contract for derived-view computations.
///
/// All views are stateless reads. Weekly views cover the Monday..Sunday week
/// containing the given date.
pub trait StatsServiceTrait: Send + Sync {
    /// Number of distinct categories the user logged on `date`.
    fn distinct_categories_on(&self, user_id: &str, date: NaiveDate) -> Result<usize>;

    /// Distinct-category progress for the day, formatted `"n/6"`.
    fn today_progress(&self, user_id: &str, date: NaiveDate) -> Result<String>;

    /// Days with at least one activity in the week containing `date`,
    /// formatted `"n/7 days"`.
    fn weekly_score(&self, user_id: &str, date: NaiveDate) -> Result<String>;

    /// Distinct-category count for each of the 7 days of the week containing
    /// `date`. Zero-activity days appear with a zero count.
    fn week_grid(&self, user_id: &str, date: NaiveDate) -> Result<Vec<WeekGridEntry>>;

    /// Total badges the user has earned.
    fn badges_earned_count(&self, user_id: &str) -> Result<i64>;

    /// Combined stats block for the dashboard.
    fn user_stats(&self, user_id: &str, date: NaiveDate) -> Result<UserStats>;
}
