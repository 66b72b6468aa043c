//! Activity repository and service traits.
//!
//! These traits define the contract for activity operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::activities_model::{Activity, ActivityMutationResult, ActivityUpdate, NewActivity};
use crate::errors::Result;

/// Trait defining the contract for Activity repository operations.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Retrieves an activity by its ID.
    fn get_by_id(&self, activity_id: &str) -> Result<Activity>;

    /// Lists a user's activities, oldest day first.
    fn get_by_user(&self, user_id: &str) -> Result<Vec<Activity>>;

    /// Lists a user's activities for one calendar day.
    fn get_by_user_and_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Activity>>;

    /// Lists a user's activities with `start <= date <= end`.
    fn get_by_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Activity>>;

    /// Persists a fully formed activity.
    async fn create(&self, activity: Activity) -> Result<Activity>;

    /// Replaces the stored row for the activity's ID.
    async fn update(&self, activity: Activity) -> Result<Activity>;

    /// Deletes an activity by its ID. Returns the number of deleted records.
    async fn delete(&self, activity_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Activity service operations.
///
/// Writes run the streak/badge follow-up for the touched day before they
/// return; reads are plain queries.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    /// Validates and records a new activity.
    async fn create_activity(&self, new_activity: NewActivity) -> Result<ActivityMutationResult>;

    /// Applies a partial update to an existing activity.
    async fn update_activity(&self, update: ActivityUpdate) -> Result<ActivityMutationResult>;

    /// Deletes an activity. Streak counters and earned badges stay as they
    /// are.
    async fn delete_activity(&self, activity_id: &str) -> Result<ActivityMutationResult>;

    /// Retrieves an activity by ID.
    fn get_activity(&self, activity_id: &str) -> Result<Activity>;

    /// Lists a user's activities.
    fn get_activities_by_user(&self, user_id: &str) -> Result<Vec<Activity>>;

    /// Lists a user's activities for one calendar day.
    fn get_activities_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Activity>>;

    /// Lists a user's activities within an inclusive date range.
    fn get_activities_by_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Activity>>;
}
