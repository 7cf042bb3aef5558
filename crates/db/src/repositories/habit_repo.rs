//! Repository for the `habit_definitions` and `habit_entries` tables.

use hardtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::habit::{
    CreateHabitDefinition, HabitDefinition, HabitEntry, UpdateHabitDefinition,
};

/// Column list for the `habit_definitions` table.
const DEFINITION_COLUMNS: &str = "id, challenge_id, name, block_type, target, unit, \
    is_hard, is_active, sort_order, category, created_at, updated_at";

/// Column list for the `habit_entries` table.
const ENTRY_COLUMNS: &str =
    "id, habit_definition_id, day, completed, value, created_at, updated_at";

/// Provides CRUD operations for habit definitions and their entries.
pub struct HabitRepo;

impl HabitRepo {
    // -- definitions ----------------------------------------------------------

    /// Insert a new habit definition, returning the created row.
    pub async fn create_definition(
        pool: &PgPool,
        input: &CreateHabitDefinition,
    ) -> Result<HabitDefinition, sqlx::Error> {
        let query = format!(
            "INSERT INTO habit_definitions
                (challenge_id, name, block_type, target, unit, is_hard, sort_order, category)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), $8)
             RETURNING {DEFINITION_COLUMNS}"
        );
        sqlx::query_as::<_, HabitDefinition>(&query)
            .bind(input.challenge_id)
            .bind(&input.name)
            .bind(&input.block_type)
            .bind(input.target)
            .bind(&input.unit)
            .bind(input.is_hard)
            .bind(input.sort_order)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a habit definition by internal ID.
    pub async fn find_definition(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HabitDefinition>, sqlx::Error> {
        let query = format!("SELECT {DEFINITION_COLUMNS} FROM habit_definitions WHERE id = $1");
        sqlx::query_as::<_, HabitDefinition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a challenge's habit definitions in sort order.
    pub async fn list_definitions(
        pool: &PgPool,
        challenge_id: DbId,
        active_only: bool,
    ) -> Result<Vec<HabitDefinition>, sqlx::Error> {
        let query = if active_only {
            format!(
                "SELECT {DEFINITION_COLUMNS} FROM habit_definitions
                 WHERE challenge_id = $1 AND is_active = true
                 ORDER BY sort_order, id"
            )
        } else {
            format!(
                "SELECT {DEFINITION_COLUMNS} FROM habit_definitions
                 WHERE challenge_id = $1
                 ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, HabitDefinition>(&query)
            .bind(challenge_id)
            .fetch_all(pool)
            .await
    }

    /// Update a habit definition. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_definition(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHabitDefinition,
    ) -> Result<Option<HabitDefinition>, sqlx::Error> {
        let query = format!(
            "UPDATE habit_definitions SET
                name = COALESCE($2, name),
                target = COALESCE($3, target),
                unit = COALESCE($4, unit),
                is_hard = COALESCE($5, is_hard),
                is_active = COALESCE($6, is_active),
                sort_order = COALESCE($7, sort_order),
                category = COALESCE($8, category)
             WHERE id = $1
             RETURNING {DEFINITION_COLUMNS}"
        );
        sqlx::query_as::<_, HabitDefinition>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.target)
            .bind(&input.unit)
            .bind(input.is_hard)
            .bind(input.is_active)
            .bind(input.sort_order)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    // -- entries --------------------------------------------------------------

    /// List every entry belonging to a challenge's definitions, ordered
    /// by day. Used for bulk completion scans.
    pub async fn list_entries_for_challenge(
        pool: &PgPool,
        challenge_id: DbId,
    ) -> Result<Vec<HabitEntry>, sqlx::Error> {
        sqlx::query_as::<_, HabitEntry>(
            "SELECT e.id, e.habit_definition_id, e.day, e.completed, e.value,
                    e.created_at, e.updated_at
             FROM habit_entries e
             JOIN habit_definitions d ON d.id = e.habit_definition_id
             WHERE d.challenge_id = $1
             ORDER BY e.day, e.habit_definition_id",
        )
        .bind(challenge_id)
        .fetch_all(pool)
        .await
    }

    /// Upsert the entry for one habit definition and day.
    pub async fn upsert_entry(
        pool: &PgPool,
        habit_definition_id: DbId,
        day: i32,
        completed: bool,
        value: Option<i32>,
    ) -> Result<HabitEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO habit_entries (habit_definition_id, day, completed, value)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (habit_definition_id, day) DO UPDATE SET
                completed = EXCLUDED.completed,
                value = EXCLUDED.value
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, HabitEntry>(&query)
            .bind(habit_definition_id)
            .bind(day)
            .bind(completed)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
