//! Handlers for habit definitions and entries under
//! `/challenges/{id}/habits`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hardtrack_core::error::CoreError;
use hardtrack_core::habits::BLOCK_TYPE_COUNTER;
use hardtrack_core::types::DbId;
use hardtrack_db::models::habit::{
    CreateHabitDefinition, HabitDefinition, HabitEntry, UpdateHabitDefinition,
};
use hardtrack_db::repositories::HabitRepo;
use hardtrack_engine::habits;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{load_owned_challenge, load_user, user_zone};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /challenges/{id}/habits.
///
/// Same shape as [`CreateHabitDefinition`] minus the challenge id, which
/// comes from the URL path.
#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub block_type: String,
    pub target: Option<i32>,
    pub unit: Option<String>,
    #[serde(default)]
    pub is_hard: bool,
    pub sort_order: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListHabitsQuery {
    /// Include deactivated definitions (default: false).
    #[serde(default)]
    pub include_inactive: bool,
}

/// Request body for PUT .../entries/{day}.
///
/// Tasks send `completed`; counters send `value`.
#[derive(Debug, Deserialize)]
pub struct HabitEntryRequest {
    pub completed: Option<bool>,
    pub value: Option<i32>,
}

/// POST /api/v1/challenges/{id}/habits
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateHabitRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<HabitDefinition>>)> {
    let challenge = load_owned_challenge(&state, &auth, id).await?;

    let definition = habits::create_definition(
        &state.pool,
        &challenge,
        &CreateHabitDefinition {
            challenge_id: challenge.id,
            name: input.name,
            block_type: input.block_type,
            target: input.target,
            unit: input.unit,
            is_hard: input.is_hard,
            sort_order: input.sort_order,
            category: input.category,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: definition })))
}

/// GET /api/v1/challenges/{id}/habits
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(query): Query<ListHabitsQuery>,
) -> AppResult<Json<DataResponse<Vec<HabitDefinition>>>> {
    let challenge = load_owned_challenge(&state, &auth, id).await?;
    let definitions =
        HabitRepo::list_definitions(&state.pool, challenge.id, !query.include_inactive).await?;
    Ok(Json(DataResponse { data: definitions }))
}

/// PUT /api/v1/challenges/{id}/habits/{habit_id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, habit_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateHabitDefinition>,
) -> AppResult<Json<DataResponse<HabitDefinition>>> {
    let challenge = load_owned_challenge(&state, &auth, id).await?;
    let definition = habits::update_definition(&state.pool, &challenge, habit_id, &input).await?;
    Ok(Json(DataResponse { data: definition }))
}

/// PUT /api/v1/challenges/{id}/habits/{habit_id}/entries/{day}
pub async fn upsert_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, habit_id, entry_day)): Path<(DbId, DbId, i32)>,
    Json(input): Json<HabitEntryRequest>,
) -> AppResult<Json<DataResponse<HabitEntry>>> {
    let user = load_user(&state, &auth).await?;
    let challenge = load_owned_challenge(&state, &auth, id).await?;
    let tz = user_zone(&user);

    let definition = HabitRepo::find_definition(&state.pool, habit_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Habit definition",
            id: habit_id,
        }))?;

    let entry = if definition.block_type == BLOCK_TYPE_COUNTER {
        let value = input.value.ok_or(AppError::Core(CoreError::Validation(
            "Counter habits require a value".into(),
        )))?;
        habits::record_counter_entry(&state.pool, &challenge, &definition, entry_day, value, tz)
            .await?
    } else {
        let completed = input.completed.ok_or(AppError::Core(CoreError::Validation(
            "Task habits require a completed flag".into(),
        )))?;
        habits::toggle_entry(&state.pool, &challenge, &definition, entry_day, completed, tz)
            .await?
    };
    Ok(Json(DataResponse { data: entry }))
}
