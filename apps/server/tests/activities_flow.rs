use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use hearth_server::{api::app_router, build_state, config::Config};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: ([127, 0, 0, 1], 0).into(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        timezone: "America/Los_Angeles".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        reminder_enabled: false,
        reminder_hour: 20,
        reminder_threshold: 3,
    }
}

async fn build_test_app() -> (axum::Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (u16, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn user_id(app: &axum::Router, handle: &str) -> String {
    let (status, user) = request(app, Method::GET, &format!("/api/v1/users/{handle}"), None).await;
    assert_eq!(status, 200);
    user["id"].as_str().unwrap().to_string()
}

async fn log_activity(app: &axum::Router, user_id: &str, category: &str, date: &str) {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/v1/activities",
        Some(json!({
            "userId": user_id,
            "category": category,
            "description": format!("{category} entry"),
            "date": date,
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_roster_is_seeded_and_resolvable() {
    let (app, _db) = build_test_app().await;

    let (status, users) = request(&app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(status, 200);
    let handles: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["handle"].as_str().unwrap())
        .collect();
    assert_eq!(handles, ["andrea", "sasha", "matti", "vlad"]);

    let (status, vlad) = request(&app, Method::GET, "/api/v1/users/vlad", None).await;
    assert_eq!(status, 200);
    assert_eq!(vlad["displayName"], "Vlad");

    let (status, error) = request(&app, Method::GET, "/api/v1/users/nobody", None).await;
    assert_eq!(status, 404);
    assert_eq!(error["code"], 404);
}

#[tokio::test]
async fn test_streak_increments_then_resets_after_gap() {
    let (app, _db) = build_test_app().await;
    let vlad = user_id(&app, "vlad").await;

    log_activity(&app, &vlad, "household", "2024-01-01").await;
    log_activity(&app, &vlad, "health", "2024-01-02").await;

    let (status, streak) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{vlad}/streak"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(streak["currentStreak"], 2);
    assert_eq!(streak["longestStreak"], 2);

    // 2024-01-03 is skipped, so the next day starts a fresh run
    log_activity(&app, &vlad, "play", "2024-01-04").await;

    let (_, streak) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{vlad}/streak"),
        None,
    )
    .await;
    assert_eq!(streak["currentStreak"], 1);
    assert_eq!(streak["longestStreak"], 2);
    assert_eq!(streak["lastActivityDate"], "2024-01-04");
}

#[tokio::test]
async fn test_all_six_categories_award_one_all_rounder() {
    let (app, _db) = build_test_app().await;
    let andrea = user_id(&app, "andrea").await;

    for category in [
        "household", "health", "creative", "learning", "helping", "play",
    ] {
        log_activity(&app, &andrea, category, "2024-03-10").await;
    }

    let badges_uri = format!("/api/v1/users/{andrea}/badges");
    let (status, badges) = request(&app, Method::GET, &badges_uri, None).await;
    assert_eq!(status, 200);
    let all_rounders = badges
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["badgeType"] == "all_rounder")
        .count();
    assert_eq!(all_rounders, 1);

    // A seventh activity in an already-covered category adds no duplicate
    log_activity(&app, &andrea, "household", "2024-03-10").await;
    let (_, badges) = request(&app, Method::GET, &badges_uri, None).await;
    let all_rounders = badges
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["badgeType"] == "all_rounder")
        .count();
    assert_eq!(all_rounders, 1);
}

#[tokio::test]
async fn test_invalid_activities_are_rejected_without_side_effects() {
    let (app, _db) = build_test_app().await;
    let matti = user_id(&app, "matti").await;

    let cases = [
        json!({ "userId": matti, "category": "exercise", "description": "jog", "date": "2024-03-10" }),
        json!({ "userId": matti, "category": "health", "description": "", "date": "2024-03-10" }),
        json!({ "userId": matti, "category": "health", "description": "jog", "date": "03/10/2024" }),
    ];
    for body in cases {
        let (status, error) =
            request(&app, Method::POST, "/api/v1/activities", Some(body)).await;
        assert_eq!(status, 400);
        assert_eq!(error["code"], 400);
    }

    let (status, error) = request(
        &app,
        Method::POST,
        "/api/v1/activities",
        Some(json!({
            "userId": "ghost",
            "category": "health",
            "description": "jog",
            "date": "2024-03-10",
        })),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(error["code"], 404);

    let (status, activities) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{matti}/activities?date=2024-03-10"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert!(activities.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_lifecycle() {
    let (app, _db) = build_test_app().await;
    let sasha = user_id(&app, "sasha").await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/v1/activities",
        Some(json!({
            "userId": sasha,
            "category": "household",
            "description": "Did the dishes",
            "date": "2024-02-05",
        })),
    )
    .await;
    assert_eq!(status, 201);
    let activity_id = created["activity"]["id"].as_str().unwrap().to_string();

    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/v1/activities/{activity_id}"),
        Some(json!({ "description": "Folded laundry" })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["activity"]["description"], "Folded laundry");
    assert_eq!(updated["activity"]["category"], "household");

    // Moving the activity to the next day advances the streak
    let (status, _) = request(
        &app,
        Method::PUT,
        &format!("/api/v1/activities/{activity_id}"),
        Some(json!({ "date": "2024-02-06" })),
    )
    .await;
    assert_eq!(status, 200);

    let (_, found) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{sasha}/activities?start_date=2024-02-05&end_date=2024-02-07"),
        None,
    )
    .await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["date"], "2024-02-06");

    let streak_uri = format!("/api/v1/users/{sasha}/streak");
    let (_, streak) = request(&app, Method::GET, &streak_uri, None).await;
    assert_eq!(streak["currentStreak"], 2);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/activities/{activity_id}"),
        None,
    )
    .await;
    assert_eq!(status, 204);

    // Deleting never rolls streaks back
    let (_, streak) = request(&app, Method::GET, &streak_uri, None).await;
    assert_eq!(streak["currentStreak"], 2);
    assert_eq!(streak["lastActivityDate"], "2024-02-06");

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/activities/{activity_id}"),
        None,
    )
    .await;
    assert_eq!(status, 404);

    let (status, _) = request(
        &app,
        Method::PUT,
        "/api/v1/activities/does-not-exist",
        Some(json!({ "description": "nope" })),
    )
    .await;
    assert_eq!(status, 404);

    let (_, remaining) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{sasha}/activities"),
        None,
    )
    .await;
    assert!(remaining.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_activity_list_query_combinations() {
    let (app, _db) = build_test_app().await;
    let vlad = user_id(&app, "vlad").await;

    let (status, error) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{vlad}/activities?start_date=2024-01-01"),
        None,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], 400);

    let (status, _) = request(
        &app,
        Method::GET,
        &format!(
            "/api/v1/users/{vlad}/activities?date=2024-01-01&start_date=2024-01-01&end_date=2024-01-02"
        ),
        None,
    )
    .await;
    assert_eq!(status, 400);

    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/v1/users/{vlad}/activities?date=2024-13-01"),
        None,
    )
    .await;
    assert_eq!(status, 400);
}
