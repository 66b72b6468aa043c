//! Aggregation service implementation.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::debug;

use super::stats_model::{UserStats, WeekGridEntry};
use super::stats_traits::StatsServiceTrait;
use crate::activities::{ActivityRepositoryTrait, Category};
use crate::badges::BadgeRepositoryTrait;
use crate::errors::Result;
use crate::utils::time_utils::{get_days_between, week_start_monday};

/// Length of the Monday..Sunday reporting week.
const WEEK_DAYS: i64 = 7;

/// Computes derived views from the activity log and badge store.
pub struct StatsService {
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    badge_repository: Arc<dyn BadgeRepositoryTrait>,
}

impl StatsService {
    pub fn new(
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        badge_repository: Arc<dyn BadgeRepositoryTrait>,
    ) -> Self {
        Self {
            activity_repository,
            badge_repository,
        }
    }

    /// Distinct categories for each day of the week containing `date`.
    ///
    /// One range query covers the whole week; days without activities are
    /// present with an empty set.
    fn week_category_sets(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, HashSet<Category>>> {
        let start = week_start_monday(date);
        let end = start + Duration::days(WEEK_DAYS - 1);
        debug!("Computing week {}..{} for {}", start, end, user_id);

        let mut buckets: BTreeMap<NaiveDate, HashSet<Category>> = get_days_between(start, end)
            .into_iter()
            .map(|day| (day, HashSet::new()))
            .collect();
        for activity in self
            .activity_repository
            .get_by_user_in_range(user_id, start, end)?
        {
            if let Some(categories) = buckets.get_mut(&activity.date) {
                categories.insert(activity.category);
            }
        }
        Ok(buckets)
    }
}

impl StatsServiceTrait for StatsService {
    fn distinct_categories_on(&self, user_id: &str, date: NaiveDate) -> Result<usize> {
        let categories: HashSet<Category> = self
            .activity_repository
            .get_by_user_and_date(user_id, date)?
            .into_iter()
            .map(|activity| activity.category)
            .collect();
        Ok(categories.len())
    }

    fn today_progress(&self, user_id: &str, date: NaiveDate) -> Result<String> {
        let count = self.distinct_categories_on(user_id, date)?;
        Ok(format!("{}/{}", count, Category::ALL.len()))
    }

    fn weekly_score(&self, user_id: &str, date: NaiveDate) -> Result<String> {
        let buckets = self.week_category_sets(user_id, date)?;
        let active_days = buckets
            .values()
            .filter(|categories| !categories.is_empty())
            .count();
        Ok(format!("{}/{} days", active_days, WEEK_DAYS))
    }

    fn week_grid(&self, user_id: &str, date: NaiveDate) -> Result<Vec<WeekGridEntry>> {
        let buckets = self.week_category_sets(user_id, date)?;
        Ok(buckets
            .into_iter()
            .map(|(date, categories)| WeekGridEntry {
                date,
                category_count: categories.len(),
            })
            .collect())
    }

    fn badges_earned_count(&self, user_id: &str) -> Result<i64> {
        self.badge_repository.count_by_user(user_id)
    }

    fn user_stats(&self, user_id: &str, date: NaiveDate) -> Result<UserStats> {
        Ok(UserStats {
            today_progress: self.today_progress(user_id, date)?,
            weekly_score: self.weekly_score(user_id, date)?,
            badges_earned: self.badges_earned_count(user_id)?,
        })
    }
}
