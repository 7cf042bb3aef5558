//! Handlers for the `/challenges` resource.
//!
//! Every read of challenge state runs the lazy status check first, so a
//! challenge whose grace period lapsed overnight reports `failed` on the
//! very next request without waiting for the sweep.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use hardtrack_core::day;
use hardtrack_core::error::CoreError;
use hardtrack_core::types::DbId;
use hardtrack_db::models::challenge::Challenge;
use hardtrack_db::repositories::ChallengeRepo;
use hardtrack_engine::lifecycle;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::{load_owned_challenge, load_user, user_zone};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /challenges.
#[derive(Debug, Deserialize)]
pub struct StartChallengeRequest {
    /// Day 1 of the challenge; defaults to today in the user's timezone.
    pub start_date: Option<NaiveDate>,
    /// Defaults to `private`.
    pub visibility: Option<String>,
    /// `fixed` (the classic rule set) or `dynamic` (user-defined hard
    /// habits). Defaults to `fixed`; immutable after creation.
    pub completion_model: Option<String>,
}

/// Response body for status check endpoints.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub status: String,
    pub failed_on_day: Option<i32>,
    pub current_day: i32,
}

/// POST /api/v1/challenges
pub async fn start(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<StartChallengeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Challenge>>)> {
    let user = load_user(&state, &auth).await?;
    let tz = user_zone(&user);
    let today = day::today_in_zone(tz);
    let start_date = input.start_date.unwrap_or(today);
    if start_date > today {
        return Err(AppError::Core(CoreError::Validation(
            "Start date must not be in the future".into(),
        )));
    }

    let visibility = input
        .visibility
        .as_deref()
        .unwrap_or(hardtrack_core::challenge::VISIBILITY_PRIVATE);

    let challenge = lifecycle::start_challenge(
        &state.pool,
        auth.user_id,
        start_date,
        visibility,
        input.completion_model.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: challenge })))
}

/// GET /api/v1/challenges
///
/// The user's full attempt history, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Challenge>>>> {
    let challenges = ChallengeRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: challenges }))
}

/// GET /api/v1/challenges/current
pub async fn current(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Challenge>>> {
    let user = load_user(&state, &auth).await?;
    let challenge = ChallengeRepo::find_active_for_user(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Active challenge",
            id: auth.user_id,
        }))?;

    // The check may fail or complete the challenge; serve the settled row.
    lifecycle::check_challenge_status(&state.pool, challenge.id, user_zone(&user)).await?;
    let challenge = ChallengeRepo::find_by_id(&state.pool, challenge.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Challenge",
            id: challenge.id,
        }))?;
    Ok(Json(DataResponse { data: challenge }))
}

/// GET /api/v1/challenges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Challenge>>> {
    let user = load_user(&state, &auth).await?;
    let challenge = load_owned_challenge(&state, &auth, id).await?;
    lifecycle::check_challenge_status(&state.pool, challenge.id, user_zone(&user)).await?;
    let challenge = ChallengeRepo::find_by_id(&state.pool, challenge.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Challenge",
            id,
        }))?;
    Ok(Json(DataResponse { data: challenge }))
}

/// POST /api/v1/challenges/{id}/check
///
/// Explicit lazy status evaluation. Idempotent; safe to call on every
/// client foreground.
pub async fn check(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CheckResponse>>> {
    let user = load_user(&state, &auth).await?;
    load_owned_challenge(&state, &auth, id).await?;

    let check = lifecycle::check_challenge_status(&state.pool, id, user_zone(&user)).await?;
    Ok(Json(DataResponse {
        data: CheckResponse {
            status: check.status,
            failed_on_day: check.failed_on_day,
            current_day: check.current_day,
        },
    }))
}
