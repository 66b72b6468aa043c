use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use super::badges_catalog::catalog_entry;
use super::badges_model::{Badge, BadgeContext};
use super::badges_rules::{default_rules, BadgeRule};
use super::badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
use crate::activities::ActivityRepositoryTrait;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::streaks::StreakServiceTrait;
use crate::utils::time_utils::{local_date_from_utc, Tz};

/// The badge evaluator.
///
/// Builds a snapshot of one user's day (distinct categories, streak, earned
/// badges) and judges every registered rule against it.
pub struct BadgeService {
    badge_repository: Arc<dyn BadgeRepositoryTrait>,
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    streak_service: Arc<dyn StreakServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    rules: Vec<BadgeRule>,
    tz: Tz,
}

impl BadgeService {
    /// Creates a new BadgeService with the default rule registry.
    pub fn new(
        badge_repository: Arc<dyn BadgeRepositoryTrait>,
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        streak_service: Arc<dyn StreakServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
        tz: Tz,
    ) -> Self {
        Self {
            badge_repository,
            activity_repository,
            streak_service,
            event_sink,
            rules: default_rules(),
            tz,
        }
    }

    /// Replaces the rule registry.
    pub fn with_rules(mut self, rules: Vec<BadgeRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Timestamp recorded on a badge awarded for `date`.
    ///
    /// The instant's calendar day in the household timezone is always the
    /// day the badge was earned for; the per-day All-Rounder guard depends
    /// on that. A live award keeps the real clock, a backfilled one gets
    /// noon local on its day.
    fn award_timestamp(&self, date: NaiveDate) -> DateTime<Utc> {
        let now = Utc::now();
        if local_date_from_utc(now, self.tz) == date {
            return now;
        }
        date.and_hms_opt(12, 0, 0)
            .and_then(|noon| self.tz.from_local_datetime(&noon).earliest())
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or(now)
    }

    fn snapshot(&self, user_id: &str, date: NaiveDate) -> Result<BadgeContext> {
        let activities = self
            .activity_repository
            .get_by_user_and_date(user_id, date)?;
        let categories_today = activities.iter().map(|a| a.category).collect();
        let streak = self.streak_service.get_streak(user_id)?;
        let existing_badges = self.badge_repository.get_by_user(user_id)?;
        Ok(BadgeContext {
            user_id: user_id.to_string(),
            date,
            categories_today,
            streak,
            existing_badges,
            tz: self.tz,
        })
    }
}

#[async_trait::async_trait]
impl BadgeServiceTrait for BadgeService {
    async fn evaluate_day(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Badge>> {
        let ctx = self.snapshot(user_id, date)?;

        let mut awarded = Vec::new();
        for rule in &self.rules {
            if rule.should_award(&ctx) {
                let badge = Badge {
                    id: Uuid::new_v4().to_string(),
                    user_id: user_id.to_string(),
                    badge_type: rule.badge_type.to_string(),
                    earned_at: self.award_timestamp(ctx.date),
                };
                let created = self.badge_repository.create(badge).await?;
                let title = catalog_entry(&created.badge_type)
                    .map(|spec| spec.title)
                    .unwrap_or(&created.badge_type);
                info!("Awarded '{}' to {}", title, user_id);
                self.event_sink.emit(DomainEvent::badge_earned(
                    user_id.to_string(),
                    created.badge_type.clone(),
                ));
                awarded.push(created);
            }
        }
        Ok(awarded)
    }

    fn get_badges(&self, user_id: &str) -> Result<Vec<Badge>> {
        self.badge_repository.get_by_user(user_id)
    }
}
