//! Badge repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::badges_model::Badge;
use crate::errors::Result;

/// Trait defining the contract for Badge repository operations.
#[async_trait]
pub trait BadgeRepositoryTrait: Send + Sync {
    /// Lists a user's badges, newest first.
    fn get_by_user(&self, user_id: &str) -> Result<Vec<Badge>>;

    /// Counts a user's badges.
    fn count_by_user(&self, user_id: &str) -> Result<i64>;

    /// Persists a badge.
    async fn create(&self, badge: Badge) -> Result<Badge>;
}

/// Trait defining the contract for Badge service operations.
#[async_trait]
pub trait BadgeServiceTrait: Send + Sync {
    /// Judges every registered rule against the user's day and awards what
    /// is newly satisfied. Returns the badges created by this call.
    async fn evaluate_day(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Badge>>;

    /// Lists a user's earned badges, newest first.
    fn get_badges(&self, user_id: &str) -> Result<Vec<Badge>>;
}
