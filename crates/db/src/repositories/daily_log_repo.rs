//! Repository for the `daily_logs` table.

use hardtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::daily_log::{DailyLog, DailyLogWrite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, challenge_id, day, \
    workout1_type, workout1_name, workout1_duration_minutes, workout1_outdoor, \
    workout2_type, workout2_name, workout2_duration_minutes, workout2_outdoor, \
    diet_followed, no_alcohol, water_units, reading_minutes, photo_ref, \
    all_requirements_met, completed_at, created_at, updated_at";

/// Provides read/write operations for fixed-model daily logs.
pub struct DailyLogRepo;

impl DailyLogRepo {
    /// Find the log for one challenge day.
    pub async fn find(
        pool: &PgPool,
        challenge_id: DbId,
        day: i32,
    ) -> Result<Option<DailyLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_logs WHERE challenge_id = $1 AND day = $2");
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(challenge_id)
            .bind(day)
            .fetch_optional(pool)
            .await
    }

    /// List every log for a challenge ordered by day.
    pub async fn list_for_challenge(
        pool: &PgPool,
        challenge_id: DbId,
    ) -> Result<Vec<DailyLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM daily_logs WHERE challenge_id = $1 ORDER BY day");
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(challenge_id)
            .fetch_all(pool)
            .await
    }

    /// Upsert the full merged field set for one challenge day.
    ///
    /// `completed_at` is stamped the first time `all_requirements_met`
    /// becomes true and cleared if a later edit breaks the day.
    pub async fn upsert(
        pool: &PgPool,
        challenge_id: DbId,
        day: i32,
        write: &DailyLogWrite,
    ) -> Result<DailyLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_logs
                (challenge_id, day,
                 workout1_type, workout1_name, workout1_duration_minutes, workout1_outdoor,
                 workout2_type, workout2_name, workout2_duration_minutes, workout2_outdoor,
                 diet_followed, no_alcohol, water_units, reading_minutes, photo_ref,
                 all_requirements_met, completed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     CASE WHEN $16 THEN NOW() END)
             ON CONFLICT (challenge_id, day) DO UPDATE SET
                workout1_type = EXCLUDED.workout1_type,
                workout1_name = EXCLUDED.workout1_name,
                workout1_duration_minutes = EXCLUDED.workout1_duration_minutes,
                workout1_outdoor = EXCLUDED.workout1_outdoor,
                workout2_type = EXCLUDED.workout2_type,
                workout2_name = EXCLUDED.workout2_name,
                workout2_duration_minutes = EXCLUDED.workout2_duration_minutes,
                workout2_outdoor = EXCLUDED.workout2_outdoor,
                diet_followed = EXCLUDED.diet_followed,
                no_alcohol = EXCLUDED.no_alcohol,
                water_units = EXCLUDED.water_units,
                reading_minutes = EXCLUDED.reading_minutes,
                photo_ref = EXCLUDED.photo_ref,
                all_requirements_met = EXCLUDED.all_requirements_met,
                completed_at = CASE
                    WHEN EXCLUDED.all_requirements_met
                        THEN COALESCE(daily_logs.completed_at, NOW())
                    ELSE NULL
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(challenge_id)
            .bind(day)
            .bind(&write.workout1_type)
            .bind(&write.workout1_name)
            .bind(write.workout1_duration_minutes)
            .bind(write.workout1_outdoor)
            .bind(&write.workout2_type)
            .bind(&write.workout2_name)
            .bind(write.workout2_duration_minutes)
            .bind(write.workout2_outdoor)
            .bind(write.diet_followed)
            .bind(write.no_alcohol)
            .bind(write.water_units)
            .bind(write.reading_minutes)
            .bind(&write.photo_ref)
            .bind(write.all_requirements_met)
            .fetch_one(pool)
            .await
    }
}
