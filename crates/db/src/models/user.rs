//! User entity model and DTOs.
//!
//! Authentication is external; this table only carries the durable
//! identity plus challenge-lifetime bookkeeping.

use hardtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// IANA timezone preference (e.g. `"America/New_York"`); the sweep
    /// falls back to UTC when absent.
    pub timezone: Option<String>,
    /// Pointer to the single active challenge, if any.
    pub current_challenge_id: Option<DbId>,
    /// Monotonically non-decreasing; updated only at failure/completion.
    pub longest_streak: i32,
    pub lifetime_restart_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub timezone: Option<String>,
}

/// DTO for updating user settings. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserSettings {
    pub timezone: Option<String>,
}
