use std::sync::Arc;

use crate::{config::Config, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod activities;
mod badges;
mod events;
mod reminders;
mod stats;
mod streaks;
mod users;

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness includes a storage round-trip so a wedged database fails the
/// probe.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.user_service.get_all_users()?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|origin| match origin.parse::<axum::http::HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring unparseable CORS origin '{}'", origin);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(users::router())
        .merge(activities::router())
        .merge(streaks::router())
        .merge(badges::router())
        .merge(stats::router())
        .merge(events::router())
        .merge(reminders::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
