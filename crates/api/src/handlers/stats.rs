//! Handler for the `/stats` endpoint.

use axum::extract::State;
use axum::Json;
use hardtrack_engine::stats::{self, LifetimeStats};

use crate::error::AppResult;
use crate::handlers::load_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<LifetimeStats>>> {
    let user = load_user(&state, &auth).await?;
    let stats = stats::lifetime_stats(&state.pool, &user).await?;
    Ok(Json(DataResponse { data: stats }))
}
