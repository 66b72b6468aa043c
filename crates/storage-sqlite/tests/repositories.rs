//! Repository tests against a real SQLite database file.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;
use uuid::Uuid;

use hearth_core::activities::{Activity, ActivityRepositoryTrait, Category};
use hearth_core::badges::{Badge, BadgeRepositoryTrait};
use hearth_core::errors::{DatabaseError, Error};
use hearth_core::streaks::{StreakRepositoryTrait, StreakTransition};
use hearth_core::users::{NewUser, UserRepositoryTrait};
use hearth_storage_sqlite::activities::ActivityRepository;
use hearth_storage_sqlite::badges::BadgeRepository;
use hearth_storage_sqlite::streaks::StreakRepository;
use hearth_storage_sqlite::users::UserRepository;
use hearth_storage_sqlite::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};

struct TestDb {
    // Held so the directory outlives the pool.
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir
        .path()
        .join("test.db")
        .to_str()
        .expect("utf-8 path")
        .to_string();

    init(&db_path).expect("init database");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer(pool.clone());

    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

async fn seed_user(db: &TestDb, handle: &str) -> String {
    let repository = UserRepository::new(db.pool.clone(), db.writer.clone());
    let user = repository
        .create(NewUser {
            id: None,
            handle: handle.to_string(),
            display_name: handle.to_string(),
        })
        .await
        .expect("create user");
    user.id
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn activity(user_id: &str, category: Category, day: &str) -> Activity {
    Activity {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        category,
        description: format!("{} on {}", category, day),
        date: date(day),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_user_roundtrip_and_unique_handle() {
    let db = setup();
    let repository = UserRepository::new(db.pool.clone(), db.writer.clone());

    let created = repository
        .create(NewUser {
            id: None,
            handle: "vlad".to_string(),
            display_name: "Vlad".to_string(),
        })
        .await
        .unwrap();

    let by_handle = repository.get_by_handle("vlad").unwrap();
    assert_eq!(by_handle.id, created.id);
    assert_eq!(by_handle.display_name, "Vlad");
    assert_eq!(repository.get_by_id(&created.id).unwrap().handle, "vlad");

    let err = repository
        .create(NewUser {
            id: None,
            handle: "vlad".to_string(),
            display_name: "Vlad again".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let db = setup();
    let repository = UserRepository::new(db.pool.clone(), db.writer.clone());

    let err = repository.get_by_handle("ghost").unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_activity_range_scan_crosses_month_boundary() {
    let db = setup();
    let user_id = seed_user(&db, "matti").await;
    let repository = ActivityRepository::new(db.pool.clone(), db.writer.clone());

    for day in ["2024-01-30", "2024-01-31", "2024-02-01", "2024-02-09"] {
        repository
            .create(activity(&user_id, Category::Household, day))
            .await
            .unwrap();
    }

    // Stored dates compare as text; zero padding keeps calendar order.
    let in_range = repository
        .get_by_user_in_range(&user_id, date("2024-01-31"), date("2024-02-09"))
        .unwrap();
    let days: Vec<String> = in_range.iter().map(|a| a.date.to_string()).collect();
    assert_eq!(days, vec!["2024-01-31", "2024-02-01", "2024-02-09"]);
}

#[tokio::test]
async fn test_activity_update_and_delete() {
    let db = setup();
    let user_id = seed_user(&db, "sasha").await;
    let repository = ActivityRepository::new(db.pool.clone(), db.writer.clone());

    let mut stored = repository
        .create(activity(&user_id, Category::Learning, "2024-03-10"))
        .await
        .unwrap();

    stored.description = "Read two chapters".to_string();
    stored.category = Category::Creative;
    let updated = repository.update(stored.clone()).await.unwrap();
    assert_eq!(updated.description, "Read two chapters");
    assert_eq!(updated.category, Category::Creative);

    assert_eq!(repository.delete(&stored.id).await.unwrap(), 1);
    assert_eq!(repository.delete(&stored.id).await.unwrap(), 0);
    let err = repository.get_by_id(&stored.id).unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_activity_same_day_ordering_is_stable() {
    let db = setup();
    let user_id = seed_user(&db, "andrea").await;
    let repository = ActivityRepository::new(db.pool.clone(), db.writer.clone());

    let base = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
    for (offset, category) in [(0i64, Category::Play), (60, Category::Health)] {
        let mut first = activity(&user_id, category, "2024-03-10");
        first.created_at = base + chrono::Duration::seconds(offset);
        repository.create(first).await.unwrap();
    }

    let on_day = repository
        .get_by_user_and_date(&user_id, date("2024-03-10"))
        .unwrap();
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].category, Category::Play);
    assert_eq!(on_day[1].category, Category::Health);
}

#[tokio::test]
async fn test_streak_seed_and_advance() {
    let db = setup();
    let user_id = seed_user(&db, "vlad").await;
    let repository = StreakRepository::new(db.pool.clone(), db.writer.clone());

    assert!(repository.get_by_user(&user_id).unwrap().is_none());
    repository.seed(&user_id).await.unwrap();
    repository.seed(&user_id).await.unwrap(); // idempotent

    let seeded = repository.get_by_user(&user_id).unwrap().unwrap();
    assert_eq!(seeded.current_streak, 0);
    assert_eq!(seeded.longest_streak, 0);

    let first = repository
        .apply_activity_day(&user_id, date("2024-01-01"))
        .await
        .unwrap();
    assert_eq!(first.transition, StreakTransition::Started);

    let second = repository
        .apply_activity_day(&user_id, date("2024-01-02"))
        .await
        .unwrap();
    assert_eq!(second.streak.current_streak, 2);

    // Gap on 2024-01-03; the run restarts but the record survives.
    let after_gap = repository
        .apply_activity_day(&user_id, date("2024-01-04"))
        .await
        .unwrap();
    assert_eq!(after_gap.transition, StreakTransition::Reset);
    assert_eq!(after_gap.streak.current_streak, 1);
    assert_eq!(after_gap.streak.longest_streak, 2);

    let stored = repository.get_by_user(&user_id).unwrap().unwrap();
    assert_eq!(stored.current_streak, 1);
    assert_eq!(stored.last_activity_date, Some(date("2024-01-04")));
}

#[tokio::test]
async fn test_concurrent_same_day_writes_count_once() {
    let db = setup();
    let user_id = seed_user(&db, "matti").await;
    let repository = Arc::new(StreakRepository::new(db.pool.clone(), db.writer.clone()));

    repository
        .apply_activity_day(&user_id, date("2024-05-01"))
        .await
        .unwrap();

    // Many simultaneous writes for the same next day must not inflate the
    // counter; the writer actor serializes the read-advance-write.
    let mut handles = Vec::new();
    for _ in 0..10 {
        let repository = repository.clone();
        let user_id = user_id.clone();
        handles.push(tokio::spawn(async move {
            repository
                .apply_activity_day(&user_id, date("2024-05-02"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = repository.get_by_user(&user_id).unwrap().unwrap();
    assert_eq!(stored.current_streak, 2);
    assert_eq!(stored.longest_streak, 2);
}

#[tokio::test]
async fn test_badges_order_newest_first() {
    let db = setup();
    let user_id = seed_user(&db, "andrea").await;
    let repository = BadgeRepository::new(db.pool.clone(), db.writer.clone());

    let earlier = Badge {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        badge_type: "all_rounder".to_string(),
        earned_at: Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap(),
    };
    let later = Badge {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        badge_type: "week_warrior".to_string(),
        earned_at: Utc.with_ymd_and_hms(2024, 3, 8, 20, 0, 0).unwrap(),
    };
    repository.create(earlier).await.unwrap();
    repository.create(later).await.unwrap();

    let badges = repository.get_by_user(&user_id).unwrap();
    assert_eq!(badges.len(), 2);
    assert_eq!(badges[0].badge_type, "week_warrior");
    assert_eq!(badges[1].badge_type, "all_rounder");
    assert_eq!(repository.count_by_user(&user_id).unwrap(), 2);
}

#[tokio::test]
async fn test_activity_requires_existing_user() {
    let db = setup();
    let repository = ActivityRepository::new(db.pool.clone(), db.writer.clone());

    let err = repository
        .create(activity("nobody", Category::Play, "2024-03-10"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::ForeignKeyViolation(_))
    ));
}
