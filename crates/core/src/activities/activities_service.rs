use chrono::{NaiveDate, Utc};
use log::warn;
use std::str::FromStr;
use std::sync::Arc;

use super::activities_model::{
    parse_activity_date, Activity, ActivityMutationResult, ActivityUpdate, Category, NewActivity,
};
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::badges::BadgeServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::streaks::StreakServiceTrait;
use crate::users::UserServiceTrait;
use uuid::Uuid;

/// Service for managing activities.
///
/// Every write runs the day's follow-up before returning: the streak
/// advances, then badge rules get a look at the day. Follow-up failures do
/// not undo the committed write; they are logged and surfaced as warnings
/// on the result.
pub struct ActivityService {
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    user_service: Arc<dyn UserServiceTrait>,
    streak_service: Arc<dyn StreakServiceTrait>,
    badge_service: Arc<dyn BadgeServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ActivityService {
    /// Creates a new ActivityService instance with injected dependencies.
    pub fn new(
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        user_service: Arc<dyn UserServiceTrait>,
        streak_service: Arc<dyn StreakServiceTrait>,
        badge_service: Arc<dyn BadgeServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            activity_repository,
            user_service,
            streak_service,
            badge_service,
            event_sink,
        }
    }

    /// Advances the streak and evaluates badge rules for the touched day.
    async fn run_follow_up(&self, user_id: &str, date: NaiveDate) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Err(e) = self.streak_service.record_activity_day(user_id, date).await {
            warn!("Streak update for {} on {} failed: {}", user_id, date, e);
            warnings.push(format!("streak update failed: {}", e));
        }
        if let Err(e) = self.badge_service.evaluate_day(user_id, date).await {
            warn!("Badge evaluation for {} on {} failed: {}", user_id, date, e);
            warnings.push(format!("badge evaluation failed: {}", e));
        }
        warnings
    }
}

#[async_trait::async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn create_activity(&self, new_activity: NewActivity) -> Result<ActivityMutationResult> {
        let (category, date) = new_activity.validate()?;
        let user = self.user_service.get_user(&new_activity.user_id)?;

        let activity = Activity {
            id: new_activity
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user.id,
            category,
            description: new_activity.description.trim().to_string(),
            date,
            created_at: Utc::now(),
        };

        let created = self.activity_repository.create(activity).await?;
        self.event_sink.emit(DomainEvent::activity_logged(
            created.id.clone(),
            created.user_id.clone(),
            created.date,
        ));

        let warnings = self.run_follow_up(&created.user_id, created.date).await;
        Ok(ActivityMutationResult {
            activity: created,
            warnings,
        })
    }

    async fn update_activity(&self, update: ActivityUpdate) -> Result<ActivityMutationResult> {
        update.validate()?;
        let id = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;

        let mut activity = self.activity_repository.get_by_id(&id)?;
        if let Some(category) = &update.category {
            activity.category = Category::from_str(category)?;
        }
        if let Some(description) = &update.description {
            activity.description = description.trim().to_string();
        }
        if let Some(date) = &update.date {
            activity.date = parse_activity_date(date)?;
        }

        let updated = self.activity_repository.update(activity).await?;
        self.event_sink.emit(DomainEvent::activity_updated(
            updated.id.clone(),
            updated.user_id.clone(),
            updated.date,
        ));

        let warnings = self.run_follow_up(&updated.user_id, updated.date).await;
        Ok(ActivityMutationResult {
            activity: updated,
            warnings,
        })
    }

    async fn delete_activity(&self, activity_id: &str) -> Result<ActivityMutationResult> {
        let existing = self.activity_repository.get_by_id(activity_id)?;
        self.activity_repository.delete(activity_id).await?;
        self.event_sink.emit(DomainEvent::activity_deleted(
            existing.id.clone(),
            existing.user_id.clone(),
            existing.date,
        ));

        // Deletion never rolls counters back: the streak stays where it is
        // and earned badges stay earned. Badge rules still get a look at the
        // day so nothing newly satisfied is missed.
        let mut warnings = Vec::new();
        if let Err(e) = self
            .badge_service
            .evaluate_day(&existing.user_id, existing.date)
            .await
        {
            warn!(
                "Badge evaluation for {} on {} failed: {}",
                existing.user_id, existing.date, e
            );
            warnings.push(format!("badge evaluation failed: {}", e));
        }

        Ok(ActivityMutationResult {
            activity: existing,
            warnings,
        })
    }

    fn get_activity(&self, activity_id: &str) -> Result<Activity> {
        self.activity_repository.get_by_id(activity_id)
    }

    fn get_activities_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        self.user_service.get_user(user_id)?;
        self.activity_repository.get_by_user(user_id)
    }

    fn get_activities_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Activity>> {
        self.user_service.get_user(user_id)?;
        self.activity_repository.get_by_user_and_date(user_id, date)
    }

    fn get_activities_by_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Activity>> {
        self.user_service.get_user(user_id)?;
        self.activity_repository
            .get_by_user_in_range(user_id, start, end)
    }
}
