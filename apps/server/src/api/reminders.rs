use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    scheduler::{run_reminder_sweep, SweepSummary},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use hearth_core::utils::time_utils::next_occurrence_of_hour;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderStatus {
    enabled: bool,
    hour: u32,
    threshold: usize,
    timezone: String,
    next_run_at: Option<DateTime<Utc>>,
}

async fn get_reminder_status(State(state): State<Arc<AppState>>) -> Json<ReminderStatus> {
    let next_run_at = state
        .reminder
        .enabled
        .then(|| next_occurrence_of_hour(Utc::now(), state.timezone, state.reminder.hour));
    Json(ReminderStatus {
        enabled: state.reminder.enabled,
        hour: state.reminder.hour,
        threshold: state.reminder.threshold,
        timezone: state.timezone.name().to_string(),
        next_run_at,
    })
}

/// Manual trigger for one reminder sweep, outside the daily schedule.
async fn run_reminders(State(state): State<Arc<AppState>>) -> ApiResult<Json<SweepSummary>> {
    let summary = run_reminder_sweep(&state).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reminders/status", get(get_reminder_status))
        .route("/reminders/run", post(run_reminders))
}
