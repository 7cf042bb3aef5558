//! Integration tests for the challenge lifecycle API: starting, the
//! one-active rule, daily log writes, lazy failure on read, and the
//! error taxonomy.

mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use common::{body_json, request};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Starting challenges
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn start_challenge_returns_created_with_envelope(pool: PgPool) {
    let user = common::seed_user(&pool, "adela").await;
    let app = common::build_test_app(pool);

    let response = request(
        app,
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["current_day"], 1);
    assert_eq!(body["data"]["completion_model"], "fixed");
    assert_eq!(body["data"]["visibility"], "private");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_start_returns_conflict_code(pool: PgPool) {
    let user = common::seed_user(&pool, "bruno").await;
    let app = common::build_test_app(pool.clone());

    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = request(
        app,
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT_ACTIVE_CHALLENGE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn future_start_date_is_rejected(pool: PgPool) {
    let user = common::seed_user(&pool, "celina").await;
    let app = common::build_test_app(pool);

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let response = request(
        app,
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({ "start_date": tomorrow })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Daily logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_log_updates_accumulate_into_completion(pool: PgPool) {
    let user = common::seed_user(&pool, "diana").await;
    let app = common::build_test_app(pool);

    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({})),
    )
    .await;
    let challenge_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Workouts only: not yet complete.
    let response = request(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/challenges/{challenge_id}/logs/1"),
        user.id,
        Some(json!({
            "workout1_duration_minutes": 50,
            "workout2_duration_minutes": 45,
            "workout2_outdoor": true,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["all_requirements_met"], false);

    // Remaining requirements: the merged day completes.
    let response = request(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/challenges/{challenge_id}/logs/1"),
        user.id,
        Some(json!({
            "diet_followed": true,
            "no_alcohol": true,
            "water_units": 128,
            "reading_minutes": 20,
            "photo_ref": "photos/day1.jpg",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["all_requirements_met"], true);

    // The feed now carries exactly one day_completed event.
    let response = request(app, Method::GET, "/api/v1/feed", user.id, None).await;
    let body = body_json(response).await;
    let day_completed: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["event_type"] == "day_completed")
        .collect();
    assert_eq!(day_completed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_day_is_rejected(pool: PgPool) {
    let user = common::seed_user(&pool, "edyta").await;
    let app = common::build_test_app(pool);

    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({})),
    )
    .await;
    let challenge_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = request(
        app,
        Method::PUT,
        &format!("/api/v1/challenges/{challenge_id}/logs/99"),
        user.id,
        Some(json!({ "water_units": 10 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_day_returns_edit_window_code(pool: PgPool) {
    let user = common::seed_user(&pool, "felka").await;
    let app = common::build_test_app(pool);

    // Start far enough back that day 1 is complete-able no more, but
    // keep days 8..10 alive so the lazy check does not fail the
    // challenge before the write is attempted.
    let start = Utc::now().date_naive() - Duration::days(9);
    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({ "start_date": start })),
    )
    .await;
    let challenge_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = request(
        app,
        Method::PUT,
        &format!("/api/v1/challenges/{challenge_id}/logs/1"),
        user.id,
        Some(json!({ "water_units": 10 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "EDIT_WINDOW_CLOSED");
}

// ---------------------------------------------------------------------------
// Lazy failure on read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_challenge_settles_to_failed_on_read(pool: PgPool) {
    let user = common::seed_user(&pool, "gaja").await;
    let app = common::build_test_app(pool);

    // Today is day 6; days 1 through 3 expired with no logs.
    let start = Utc::now().date_naive() - Duration::days(5);
    request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        user.id,
        Some(json!({ "start_date": start })),
    )
    .await;

    let response = request(
        app.clone(),
        Method::GET,
        "/api/v1/challenges/current",
        user.id,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "failed");
    assert_eq!(body["data"]["failed_on_day"], 1);

    // Stats reflect the settled attempt.
    let response = request(app, Method::GET, "/api/v1/stats", user.id, None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["attempt_number"], 2);
    assert_eq!(body["data"]["current_streak"], 0);
}

// ---------------------------------------------------------------------------
// Ownership and settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_challenge_is_forbidden(pool: PgPool) {
    let owner = common::seed_user(&pool, "hania").await;
    let intruder = common::seed_user(&pool, "iwo").await;
    let app = common::build_test_app(pool);

    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/challenges",
        owner.id,
        Some(json!({})),
    )
    .await;
    let challenge_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = request(
        app,
        Method::PUT,
        &format!("/api/v1/challenges/{challenge_id}/logs/1"),
        intruder.id,
        Some(json!({ "water_units": 10 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_timezone_setting_is_rejected(pool: PgPool) {
    let user = common::seed_user(&pool, "janka").await;
    let app = common::build_test_app(pool);

    let response = request(
        app.clone(),
        Method::PUT,
        "/api/v1/users/me/settings",
        user.id,
        Some(json!({ "timezone": "Mars/Olympus_Mons" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = request(
        app,
        Method::PUT,
        "/api/v1/users/me/settings",
        user.id,
        Some(json!({ "timezone": "Europe/Warsaw" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["timezone"], "Europe/Warsaw");
}
