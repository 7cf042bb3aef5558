//! Handlers for fixed-model daily logs under `/challenges/{id}/logs`.

use axum::extract::{Path, State};
use axum::Json;
use hardtrack_core::day;
use hardtrack_core::types::DbId;
use hardtrack_db::models::daily_log::{DailyLog, UpdateDailyLog};
use hardtrack_db::repositories::DailyLogRepo;
use hardtrack_engine::{completion, logs};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::{load_owned_challenge, load_user, user_zone};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Day-by-day completion view of a challenge.
#[derive(Debug, Serialize)]
pub struct DaysResponse {
    /// 1-based calendar day number of today; may exceed 75 near the end.
    pub today_day: i32,
    /// First day still editable today.
    pub editable_from: i32,
    /// Last day editable today (today itself, clamped to 75).
    pub editable_through: i32,
    /// Completion flag per day, index 0 being day 1.
    pub days_complete: Vec<bool>,
}

/// GET /api/v1/challenges/{id}/logs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DailyLog>>>> {
    let challenge = load_owned_challenge(&state, &auth, id).await?;
    let logs = DailyLogRepo::list_for_challenge(&state.pool, challenge.id).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// PUT /api/v1/challenges/{id}/logs/{day}
///
/// Partial update; omitted fields keep their stored values and the
/// derived completion flag is recomputed from the merged state.
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, log_day)): Path<(DbId, i32)>,
    Json(input): Json<UpdateDailyLog>,
) -> AppResult<Json<DataResponse<DailyLog>>> {
    let user = load_user(&state, &auth).await?;
    let challenge = load_owned_challenge(&state, &auth, id).await?;

    let log =
        logs::record_daily_log(&state.pool, &challenge, log_day, &input, user_zone(&user)).await?;
    Ok(Json(DataResponse { data: log }))
}

/// GET /api/v1/challenges/{id}/days
pub async fn days(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DaysResponse>>> {
    let user = load_user(&state, &auth).await?;
    let challenge = load_owned_challenge(&state, &auth, id).await?;

    let tz = user_zone(&user);
    let today_day = day::day_number(challenge.start_date, day::today_in_zone(tz));
    let (editable_from, editable_through) = day::editable_window(today_day);
    let days_complete =
        completion::day_completion_map(&state.pool, &challenge, challenge.current_day).await?;

    Ok(Json(DataResponse {
        data: DaysResponse {
            today_day,
            editable_from,
            editable_through: editable_through.min(day::CHALLENGE_DAYS),
            days_complete,
        },
    }))
}
