//! Repository for the append-only `activity_feed` table.

use hardtrack_core::activity::EVENT_DAY_COMPLETED;
use hardtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::ActivityEvent;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, challenge_id, event_type, day, message, created_at";

/// Provides append and read operations for the activity feed.
pub struct ActivityFeedRepo;

impl ActivityFeedRepo {
    /// Append an event unconditionally, returning the generated ID.
    ///
    /// Not for `day_completed` events; use
    /// [`insert_day_completed`](Self::insert_day_completed) for those.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        challenge_id: DbId,
        event_type: &str,
        day: Option<i32>,
        message: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO activity_feed (user_id, challenge_id, event_type, day, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(user_id)
        .bind(challenge_id)
        .bind(event_type)
        .bind(day)
        .bind(message)
        .fetch_one(pool)
        .await
    }

    /// Idempotent insert of a `day_completed` event.
    ///
    /// Returns the existing row's ID when one already exists for this
    /// (user, challenge, day). The `ON CONFLICT DO NOTHING` against the
    /// partial unique index closes the window between the existence
    /// check and the insert, so a concurrent double recording still
    /// produces exactly one row.
    pub async fn insert_day_completed(
        pool: &PgPool,
        user_id: DbId,
        challenge_id: DbId,
        day: i32,
        message: &str,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(existing) =
            Self::find_day_completed(pool, user_id, challenge_id, day).await?
        {
            return Ok(existing);
        }

        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO activity_feed (user_id, challenge_id, event_type, day, message)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id, challenge_id, day)
                WHERE event_type = 'day_completed'
                DO NOTHING
             RETURNING id",
        )
        .bind(user_id)
        .bind(challenge_id)
        .bind(EVENT_DAY_COMPLETED)
        .bind(day)
        .bind(message)
        .fetch_optional(pool)
        .await?;

        match inserted {
            Some(id) => Ok(id),
            // Lost the race; the winner's row must exist now.
            None => Self::find_day_completed(pool, user_id, challenge_id, day)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    /// Find the `day_completed` event ID for one (user, challenge, day).
    pub async fn find_day_completed(
        pool: &PgPool,
        user_id: DbId,
        challenge_id: DbId,
        day: i32,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM activity_feed
             WHERE user_id = $1 AND challenge_id = $2 AND day = $3
               AND event_type = $4",
        )
        .bind(user_id)
        .bind(challenge_id)
        .bind(day)
        .bind(EVENT_DAY_COMPLETED)
        .fetch_optional(pool)
        .await
    }

    /// List a user's feed newest-first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_feed
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActivityEvent>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count feed rows of one event type for a challenge. Used by tests
    /// and idempotency checks.
    pub async fn count_for_challenge(
        pool: &PgPool,
        challenge_id: DbId,
        event_type: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM activity_feed WHERE challenge_id = $1 AND event_type = $2",
        )
        .bind(challenge_id)
        .bind(event_type)
        .fetch_one(pool)
        .await
    }
}
