//! Repository for the `users` table.

use hardtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUserSettings, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, timezone, current_challenge_id, \
                       longest_streak, lifetime_restart_count, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, timezone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.timezone)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update user settings. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_settings(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserSettings,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET timezone = COALESCE($2, timezone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.timezone)
            .fetch_optional(pool)
            .await
    }
}
