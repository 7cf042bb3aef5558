//! Activity feed entity model.

use hardtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `activity_feed` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEvent {
    pub id: DbId,
    pub user_id: DbId,
    pub challenge_id: DbId,
    pub event_type: String,
    /// Day number for day-scoped events; `None` for lifecycle events.
    pub day: Option<i32>,
    pub message: String,
    pub created_at: Timestamp,
}
