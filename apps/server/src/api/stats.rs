use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use hearth_core::activities::parse_activity_date;
use hearth_core::stats::{UserStats, WeekGridEntry};
use hearth_core::utils::time_utils::today_in_tz;

#[derive(serde::Deserialize)]
struct DateQuery {
    date: Option<String>,
}

#[derive(serde::Deserialize)]
struct WeekQuery {
    start_date: Option<String>,
}

/// Resolves an optional explicit date, defaulting to today in the pinned
/// timezone.
fn resolve_date(raw: Option<String>, tz: Tz) -> ApiResult<NaiveDate> {
    match raw {
        Some(value) => Ok(parse_activity_date(&value)?),
        None => Ok(today_in_tz(tz)),
    }
}

async fn get_user_stats(
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserStats>> {
    let date = resolve_date(query.date, state.timezone)?;
    let stats = state.stats_service.user_stats(&id, date)?;
    Ok(Json(stats))
}

async fn get_user_week(
    Path(id): Path<String>,
    Query(query): Query<WeekQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WeekGridEntry>>> {
    let date = resolve_date(query.start_date, state.timezone)?;
    let grid = state.stats_service.week_grid(&id, date)?;
    Ok(Json(grid))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/stats", get(get_user_stats))
        .route("/users/{id}/week", get(get_user_week))
}
