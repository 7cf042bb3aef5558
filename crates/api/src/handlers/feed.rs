//! Handler for the `/feed` endpoint.

use axum::extract::{Query, State};
use axum::Json;
use hardtrack_db::models::activity::ActivityEvent;
use hardtrack_db::repositories::ActivityFeedRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/feed
///
/// The authenticated user's activity feed, newest first. `limit` is
/// clamped to 1..=100.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<DataResponse<Vec<ActivityEvent>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);

    let events = ActivityFeedRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: events }))
}
