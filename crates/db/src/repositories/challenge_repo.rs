//! Repository for the `challenges` table.
//!
//! Status transitions and the owner's bookkeeping (current-challenge
//! pointer, streak, restart counters) must move together, so `fail` and
//! `complete` run both updates in one transaction. Both are idempotent:
//! the status guard in the `UPDATE ... WHERE status = 'active'` makes a
//! repeat call a no-op, which keeps the lazy-check race harmless.

use hardtrack_core::challenge::STATUS_ACTIVE;
use hardtrack_core::day::CHALLENGE_DAYS;
use hardtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::challenge::{ActiveChallenge, Challenge, CreateChallenge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, start_date, current_day, status, failed_on_day, \
                       visibility, completion_model, restart_count, created_at, updated_at";

/// Provides CRUD and lifecycle operations for challenges.
pub struct ChallengeRepo;

impl ChallengeRepo {
    /// Insert a new active challenge and point the owner's
    /// `current_challenge_id` at it, in one transaction.
    ///
    /// The partial unique index `uq_challenges_one_active_per_user`
    /// rejects a concurrent second start with a unique violation.
    pub async fn create_active(
        pool: &PgPool,
        input: &CreateChallenge,
    ) -> Result<Challenge, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO challenges (user_id, start_date, visibility, completion_model)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let challenge = sqlx::query_as::<_, Challenge>(&insert_query)
            .bind(input.user_id)
            .bind(input.start_date)
            .bind(&input.visibility)
            .bind(&input.completion_model)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE users SET current_challenge_id = $2 WHERE id = $1")
            .bind(input.user_id)
            .bind(challenge.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(challenge)
    }

    /// Find a challenge by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges WHERE id = $1");
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's active challenge, if any.
    pub async fn find_active_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges WHERE user_id = $1 AND status = $2");
        sqlx::query_as::<_, Challenge>(&query)
            .bind(user_id)
            .bind(STATUS_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    /// List every challenge a user has attempted, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Challenge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM challenges WHERE user_id = $1 ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List every active challenge joined with its owner's timezone,
    /// oldest first. Consumed by the periodic sweep.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ActiveChallenge>, sqlx::Error> {
        sqlx::query_as::<_, ActiveChallenge>(
            "SELECT c.id, c.user_id, u.timezone
             FROM challenges c
             JOIN users u ON u.id = c.user_id
             WHERE c.status = 'active'
             ORDER BY c.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Sync `current_day` on an active challenge. No-op on terminal rows.
    pub async fn sync_current_day(pool: &PgPool, id: DbId, day: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE challenges SET current_day = $2
             WHERE id = $1 AND status = 'active' AND current_day <> $2",
        )
        .bind(id)
        .bind(day)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Transition a challenge to `failed` and apply the owner's failure
    /// bookkeeping in one transaction.
    ///
    /// Returns `false` without touching anything if the challenge is no
    /// longer active (already failed or completed), making repeat calls
    /// no-ops that never double-count.
    pub async fn fail(pool: &PgPool, id: DbId, failed_on_day: i32) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_id: Option<DbId> = sqlx::query_scalar(
            "UPDATE challenges
             SET status = 'failed', failed_on_day = $2, restart_count = restart_count + 1
             WHERE id = $1 AND status = 'active'
             RETURNING user_id",
        )
        .bind(id)
        .bind(failed_on_day)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(user_id) = user_id else {
            // Already terminal; nothing to do.
            return Ok(false);
        };

        sqlx::query(
            "UPDATE users
             SET current_challenge_id = NULL,
                 lifetime_restart_count = lifetime_restart_count + 1,
                 longest_streak = GREATEST(longest_streak, $2)
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(failed_on_day - 1)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Transition a challenge to `completed`, clamp `current_day` to 75,
    /// and apply the owner's completion bookkeeping in one transaction.
    ///
    /// Idempotent in the same way as [`fail`](Self::fail).
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_id: Option<DbId> = sqlx::query_scalar(
            "UPDATE challenges
             SET status = 'completed', current_day = $2
             WHERE id = $1 AND status = 'active'
             RETURNING user_id",
        )
        .bind(id)
        .bind(CHALLENGE_DAYS)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(user_id) = user_id else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE users
             SET current_challenge_id = NULL,
                 longest_streak = GREATEST(longest_streak, $2)
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(CHALLENGE_DAYS)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
