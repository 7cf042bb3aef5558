//! Challenge entity model and DTOs.

use chrono::NaiveDate;
use hardtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full challenge row from the `challenges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Challenge {
    pub id: DbId,
    pub user_id: DbId,
    /// Calendar date of day 1, no time component.
    pub start_date: NaiveDate,
    pub current_day: i32,
    /// One of `active`, `completed`, `failed`.
    pub status: String,
    /// Present only when `status = 'failed'`.
    pub failed_on_day: Option<i32>,
    pub visibility: String,
    /// `fixed` or `dynamic`, decided once at creation.
    pub completion_model: String,
    pub restart_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new challenge.
#[derive(Debug, Deserialize)]
pub struct CreateChallenge {
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub visibility: String,
    pub completion_model: String,
}

/// An active challenge joined with its owner's timezone preference,
/// as consumed by the periodic status sweep.
#[derive(Debug, Clone, FromRow)]
pub struct ActiveChallenge {
    pub id: DbId,
    pub user_id: DbId,
    pub timezone: Option<String>,
}
