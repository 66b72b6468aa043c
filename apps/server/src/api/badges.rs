use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use hearth_core::badges::{Badge, BadgeSpec, CATALOG};

async fn get_user_badges(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Badge>>> {
    let badges = state.badge_service.get_badges(&id)?;
    Ok(Json(badges))
}

/// The designed achievement catalog, including not-yet-implemented types.
async fn get_badge_catalog() -> Json<Vec<BadgeSpec>> {
    Json(CATALOG.to_vec())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/badges", get(get_user_badges))
        .route("/badges/catalog", get(get_badge_catalog))
}
