use std::sync::Arc;

use crate::{
    config::Config,
    events::{EventBus, SseEventSink},
};
use chrono_tz::Tz;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use hearth_core::{
    activities::{ActivityService, ActivityServiceTrait},
    badges::{BadgeService, BadgeServiceTrait},
    events::DomainEventSink,
    stats::{StatsService, StatsServiceTrait},
    streaks::{StreakService, StreakServiceTrait},
    users::{UserService, UserServiceTrait},
    utils::time_utils::parse_timezone,
};
use hearth_storage_sqlite::{
    activities::ActivityRepository, badges::BadgeRepository, db, streaks::StreakRepository,
    users::UserRepository,
};

/// Reminder scheduler settings copied out of the startup configuration.
#[derive(Clone, Copy, Debug)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub hour: u32,
    pub threshold: usize,
}

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub activity_service: Arc<dyn ActivityServiceTrait>,
    pub streak_service: Arc<dyn StreakServiceTrait>,
    pub badge_service: Arc<dyn BadgeServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
    pub event_bus: EventBus,
    pub timezone: Tz,
    pub reminder: ReminderSettings,
}

pub fn init_tracing() {
    let json_logs = std::env::var("HEARTH_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let timezone: Tz = parse_timezone(&config.timezone)?;

    let db_path = db::get_db_path(&config.db_path);
    let db_path = db::init(&db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let event_bus = EventBus::new(256);
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(SseEventSink::new(event_bus.clone()));

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let activity_repository = Arc::new(ActivityRepository::new(pool.clone(), writer.clone()));
    let badge_repository = Arc::new(BadgeRepository::new(pool.clone(), writer.clone()));
    let streak_repository = Arc::new(StreakRepository::new(pool.clone(), writer.clone()));

    let streak_service: Arc<dyn StreakServiceTrait> = Arc::new(StreakService::new(
        streak_repository.clone(),
        event_sink.clone(),
    ));
    let badge_service: Arc<dyn BadgeServiceTrait> = Arc::new(BadgeService::new(
        badge_repository.clone(),
        activity_repository.clone(),
        streak_service.clone(),
        event_sink.clone(),
        timezone,
    ));
    let stats_service: Arc<dyn StatsServiceTrait> = Arc::new(StatsService::new(
        activity_repository.clone(),
        badge_repository.clone(),
    ));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(
        user_repository.clone(),
        streak_repository.clone(),
    ));
    let activity_service: Arc<dyn ActivityServiceTrait> = Arc::new(ActivityService::new(
        activity_repository.clone(),
        user_service.clone(),
        streak_service.clone(),
        badge_service.clone(),
        event_sink.clone(),
    ));

    user_service.ensure_roster().await?;

    Ok(Arc::new(AppState {
        user_service,
        activity_service,
        streak_service,
        badge_service,
        stats_service,
        event_bus,
        timezone,
        reminder: ReminderSettings {
            enabled: config.reminder_enabled,
            hour: config.reminder_hour,
            threshold: config.reminder_threshold,
        },
    }))
}
