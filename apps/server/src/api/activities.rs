use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use hearth_core::activities::{
    parse_activity_date, Activity, ActivityMutationResult, ActivityUpdate, NewActivity,
};

#[derive(serde::Deserialize)]
struct ActivityListQuery {
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

async fn list_user_activities(
    Path(id): Path<String>,
    Query(query): Query<ActivityListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Activity>>> {
    let activities = match (query.date, query.start_date, query.end_date) {
        (Some(day), None, None) => {
            let date = parse_activity_date(&day)?;
            state
                .activity_service
                .get_activities_by_user_and_date(&id, date)?
        }
        (None, Some(start), Some(end)) => {
            let start = parse_activity_date(&start)?;
            let end = parse_activity_date(&end)?;
            state
                .activity_service
                .get_activities_by_user_in_range(&id, start, end)?
        }
        (None, None, None) => state.activity_service.get_activities_by_user(&id)?,
        _ => {
            return Err(ApiError::BadRequest(
                "Use either date or start_date with end_date".to_string(),
            ))
        }
    };
    Ok(Json(activities))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(new_activity): Json<NewActivity>,
) -> ApiResult<(StatusCode, Json<ActivityMutationResult>)> {
    let result = state.activity_service.create_activity(new_activity).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

async fn update_activity(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ActivityUpdate>,
) -> ApiResult<Json<ActivityMutationResult>> {
    update.id = Some(id);
    let result = state.activity_service.update_activity(update).await?;
    Ok(Json(result))
}

async fn delete_activity(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.activity_service.delete_activity(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", post(create_activity))
        .route(
            "/activities/{id}",
            put(update_activity).delete(delete_activity),
        )
        .route("/users/{id}/activities", get(list_user_activities))
}
