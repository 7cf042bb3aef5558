//! Handlers for the authenticated user's own profile and settings.
//!
//! Account provisioning (signup, credentials) lives in the identity
//! service; this API only reads the row and updates preferences.

use axum::extract::State;
use axum::Json;
use hardtrack_core::day;
use hardtrack_core::error::CoreError;
use hardtrack_db::models::user::{UpdateUserSettings, User};
use hardtrack_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<User>>> {
    let user = load_user(&state, &auth).await?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/me/settings
///
/// Timezone changes apply to future day-boundary calculations only;
/// nothing already recorded is reinterpreted.
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateUserSettings>,
) -> AppResult<Json<DataResponse<User>>> {
    if let Some(tz) = &input.timezone {
        day::parse_timezone(tz)?;
    }

    let user = UserRepo::update_settings(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}
