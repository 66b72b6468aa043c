use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use hearth_core::users::User;

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = state.user_service.get_all_users()?;
    Ok(Json(users))
}

/// Resolves a member by handle. The segment is named `id` so every route
/// under `/users/` shares one parameter name.
async fn get_user_by_handle(
    Path(handle): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user_by_handle(&handle)?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user_by_handle))
}
