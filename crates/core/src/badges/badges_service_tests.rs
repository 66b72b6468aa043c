#[cfg(test)]
mod tests {
    use crate::activities::{Activity, ActivityRepositoryTrait, Category};
    use crate::badges::{
        Badge, BadgeRepositoryTrait, BadgeService, BadgeServiceTrait, BADGE_ALL_ROUNDER,
        BADGE_WEEK_WARRIOR,
    };
    use crate::errors::Result;
    use crate::events::{DomainEvent, MockDomainEventSink};
    use crate::streaks::{Streak, StreakServiceTrait, StreakUpdate};
    use crate::utils::time_utils::{local_date_from_utc, DEFAULT_HOUSEHOLD_TZ};
    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    // --- Mock ActivityRepository ---
    #[derive(Clone, Default)]
    struct MockActivityRepository {
        activities: Arc<Mutex<HashMap<String, Activity>>>,
    }

    impl MockActivityRepository {
        fn new() -> Self {
            Self::default()
        }

        fn add(&self, activity: Activity) {
            self.activities
                .lock()
                .unwrap()
                .insert(activity.id.clone(), activity);
        }
    }

    #[async_trait]
    impl ActivityRepositoryTrait for MockActivityRepository {
        fn get_by_id(&self, _activity_id: &str) -> Result<Activity> {
            unimplemented!()
        }

        fn get_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
            Ok(self
                .activities
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_by_user_and_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Activity>> {
            Ok(self
                .activities
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.user_id == user_id && a.date == date)
                .cloned()
                .collect())
        }

        fn get_by_user_in_range(
            &self,
            user_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Activity>> {
            Ok(self
                .activities
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.user_id == user_id && a.date >= start && a.date <= end)
                .cloned()
                .collect())
        }

        async fn create(&self, _activity: Activity) -> Result<Activity> {
            unimplemented!()
        }

        async fn update(&self, _activity: Activity) -> Result<Activity> {
            unimplemented!()
        }

        async fn delete(&self, _activity_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    // --- Mock BadgeRepository ---
    #[derive(Clone, Default)]
    struct MockBadgeRepository {
        badges: Arc<Mutex<HashMap<String, Badge>>>,
    }

    impl MockBadgeRepository {
        fn new() -> Self {
            Self::default()
        }

        fn add(&self, badge: Badge) {
            self.badges.lock().unwrap().insert(badge.id.clone(), badge);
        }
    }

    #[async_trait]
    impl BadgeRepositoryTrait for MockBadgeRepository {
        fn get_by_user(&self, user_id: &str) -> Result<Vec<Badge>> {
            Ok(self
                .badges
                .lock()
                .unwrap()
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect())
        }

        fn count_by_user(&self, user_id: &str) -> Result<i64> {
            Ok(self.get_by_user(user_id)?.len() as i64)
        }

        async fn create(&self, badge: Badge) -> Result<Badge> {
            self.badges
                .lock()
                .unwrap()
                .insert(badge.id.clone(), badge.clone());
            Ok(badge)
        }
    }

    // --- Mock StreakService ---
    #[derive(Clone, Default)]
    struct MockStreakService {
        streaks: Arc<Mutex<HashMap<String, Streak>>>,
    }

    impl MockStreakService {
        fn new() -> Self {
            Self::default()
        }

        fn set_streak(&self, streak: Streak) {
            self.streaks
                .lock()
                .unwrap()
                .insert(streak.user_id.clone(), streak);
        }
    }

    #[async_trait]
    impl StreakServiceTrait for MockStreakService {
        fn get_streak(&self, user_id: &str) -> Result<Streak> {
            Ok(self
                .streaks
                .lock()
                .unwrap()
                .get(user_id)
                .cloned()
                .unwrap_or_else(|| Streak::zeroed(user_id)))
        }

        async fn record_activity_day(
            &self,
            _user_id: &str,
            _date: NaiveDate,
        ) -> Result<StreakUpdate> {
            unimplemented!()
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn activity(user_id: &str, category: Category, day: &str) -> Activity {
        Activity {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category,
            description: "test".to_string(),
            date: date(day),
            created_at: Utc::now(),
        }
    }

    fn badge(user_id: &str, badge_type: &str, earned_at: DateTime<Utc>) -> Badge {
        Badge {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            badge_type: badge_type.to_string(),
            earned_at,
        }
    }

    struct Fixture {
        service: BadgeService,
        activities: MockActivityRepository,
        badges: MockBadgeRepository,
        streaks: MockStreakService,
        sink: MockDomainEventSink,
    }

    fn fixture() -> Fixture {
        let activities = MockActivityRepository::new();
        let badges = MockBadgeRepository::new();
        let streaks = MockStreakService::new();
        let sink = MockDomainEventSink::new();
        let service = BadgeService::new(
            Arc::new(badges.clone()),
            Arc::new(activities.clone()),
            Arc::new(streaks.clone()),
            Arc::new(sink.clone()),
            DEFAULT_HOUSEHOLD_TZ,
        );
        Fixture {
            service,
            activities,
            badges,
            streaks,
            sink,
        }
    }

    #[tokio::test]
    async fn test_all_six_categories_awards_all_rounder_once() {
        let f = fixture();
        for category in Category::ALL {
            f.activities.add(activity("u1", category, "2024-03-10"));
        }

        let awarded = f.service.evaluate_day("u1", date("2024-03-10")).await.unwrap();
        assert_eq!(awarded.len(), 1);
        assert_eq!(awarded[0].badge_type, BADGE_ALL_ROUNDER);
        // The badge is dated on the day it was earned for, even though the
        // evaluation ran much later.
        assert_eq!(
            local_date_from_utc(awarded[0].earned_at, DEFAULT_HOUSEHOLD_TZ),
            date("2024-03-10")
        );

        // A seventh activity in an already covered category adds nothing
        f.activities
            .add(activity("u1", Category::Household, "2024-03-10"));
        let again = f.service.evaluate_day("u1", date("2024-03-10")).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(f.badges.get_by_user("u1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_five_categories_award_nothing() {
        let f = fixture();
        for category in Category::ALL.into_iter().take(5) {
            f.activities.add(activity("u1", category, "2024-03-10"));
        }

        let awarded = f.service.evaluate_day("u1", date("2024-03-10")).await.unwrap();
        assert!(awarded.is_empty());
    }

    #[tokio::test]
    async fn test_all_rounder_guard_is_scoped_to_the_day() {
        let f = fixture();
        // Earned one three days ago
        let earlier = Utc.with_ymd_and_hms(2024, 3, 7, 20, 0, 0).unwrap();
        f.badges.add(badge("u1", BADGE_ALL_ROUNDER, earlier));

        for category in Category::ALL {
            f.activities.add(activity("u1", category, "2024-03-10"));
        }

        let awarded = f.service.evaluate_day("u1", date("2024-03-10")).await.unwrap();
        assert_eq!(awarded.len(), 1);
        assert_eq!(f.badges.get_by_user("u1").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_week_warrior_at_exactly_seven() {
        let f = fixture();
        f.activities.add(activity("u1", Category::Play, "2024-01-07"));
        f.streaks.set_streak(Streak {
            user_id: "u1".to_string(),
            current_streak: 7,
            longest_streak: 7,
            last_activity_date: Some(date("2024-01-07")),
        });

        let awarded = f.service.evaluate_day("u1", date("2024-01-07")).await.unwrap();
        assert_eq!(awarded.len(), 1);
        assert_eq!(awarded[0].badge_type, BADGE_WEEK_WARRIOR);
    }

    #[tokio::test]
    async fn test_week_warrior_not_awarded_past_seven() {
        let f = fixture();
        f.activities.add(activity("u1", Category::Play, "2024-01-08"));
        f.streaks.set_streak(Streak {
            user_id: "u1".to_string(),
            current_streak: 8,
            longest_streak: 8,
            last_activity_date: Some(date("2024-01-08")),
        });

        let awarded = f.service.evaluate_day("u1", date("2024-01-08")).await.unwrap();
        assert!(awarded.is_empty());
    }

    #[tokio::test]
    async fn test_week_warrior_never_reawarded() {
        let f = fixture();
        f.badges
            .add(badge("u1", BADGE_WEEK_WARRIOR, Utc::now()));
        f.activities.add(activity("u1", Category::Play, "2024-05-07"));
        f.streaks.set_streak(Streak {
            user_id: "u1".to_string(),
            current_streak: 7,
            longest_streak: 14,
            last_activity_date: Some(date("2024-05-07")),
        });

        let awarded = f.service.evaluate_day("u1", date("2024-05-07")).await.unwrap();
        assert!(awarded.is_empty());
        assert_eq!(f.badges.get_by_user("u1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_awards_emit_events() {
        let f = fixture();
        for category in Category::ALL {
            f.activities.add(activity("u1", category, "2024-03-10"));
        }

        f.service.evaluate_day("u1", date("2024-03-10")).await.unwrap();

        let events = f.sink.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::BadgeEarned {
                user_id,
                badge_type,
            } => {
                assert_eq!(user_id, "u1");
                assert_eq!(badge_type, BADGE_ALL_ROUNDER);
            }
            other => panic!("Expected BadgeEarned, got {:?}", other),
        }
    }
}
