use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::streaks_model::{Streak, StreakUpdate};
use super::streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for reading and advancing streaks.
pub struct StreakService {
    repository: Arc<dyn StreakRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl StreakService {
    /// Creates a new StreakService instance.
    pub fn new(
        repository: Arc<dyn StreakRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl StreakServiceTrait for StreakService {
    fn get_streak(&self, user_id: &str) -> Result<Streak> {
        Ok(self
            .repository
            .get_by_user(user_id)?
            .unwrap_or_else(|| Streak::zeroed(user_id)))
    }

    async fn record_activity_day(&self, user_id: &str, date: NaiveDate) -> Result<StreakUpdate> {
        let update = self.repository.apply_activity_day(user_id, date).await?;
        debug!(
            "Streak for {} after {}: current={} longest={} ({:?})",
            user_id,
            date,
            update.streak.current_streak,
            update.streak.longest_streak,
            update.transition
        );
        if update.changed() {
            self.event_sink.emit(DomainEvent::streak_updated(
                user_id.to_string(),
                update.streak.current_streak,
                update.streak.longest_streak,
            ));
        }
        Ok(update)
    }
}
