use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use hearth_core::streaks::Streak;

/// Streak counters for a member; reads as zeros until the first activity.
async fn get_user_streak(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Streak>> {
    let streak = state.streak_service.get_streak(&id)?;
    Ok(Json(streak))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/{id}/streak", get(get_user_streak))
}
