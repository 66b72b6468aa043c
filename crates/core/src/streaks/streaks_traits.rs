//! Streak repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::streaks_model::{Streak, StreakUpdate};
use crate::errors::Result;

/// Trait defining the contract for Streak repository operations.
#[async_trait]
pub trait StreakRepositoryTrait: Send + Sync {
    /// Retrieves the streak row for a user, if one exists.
    fn get_by_user(&self, user_id: &str) -> Result<Option<Streak>>;

    /// Creates the zeroed streak row for a user if it does not exist yet.
    async fn seed(&self, user_id: &str) -> Result<()>;

    /// Applies one activity day: reads the current row, advances it with
    /// [`Streak::advance`], and writes the result back.
    ///
    /// Implementations must run the read-advance-write as a single unit
    /// (one transaction or an equivalent serialization point) so concurrent
    /// writes for the same user cannot lose an update.
    async fn apply_activity_day(&self, user_id: &str, date: NaiveDate) -> Result<StreakUpdate>;
}

/// Trait defining the contract for Streak service operations.
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    /// Retrieves a user's streak. A user with no streak row reads as zeros.
    fn get_streak(&self, user_id: &str) -> Result<Streak>;

    /// Records an activity day and returns the resulting counters.
    async fn record_activity_day(&self, user_id: &str, date: NaiveDate) -> Result<StreakUpdate>;
}
