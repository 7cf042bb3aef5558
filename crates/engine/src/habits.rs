//! Dynamic-model habit definition and entry writes.
//!
//! Entry writes share the fixed model's edit-window rules. After each
//! write the day is re-evaluated against the challenge's active hard
//! habits; a day that just became hard-complete takes the same real-time
//! advance path as a fixed-model log.

use chrono_tz::Tz;
use hardtrack_core::challenge::{self, STATUS_ACTIVE};
use hardtrack_core::error::CoreError;
use hardtrack_core::habits::{self, BLOCK_TYPE_COUNTER, BLOCK_TYPE_TASK};
use hardtrack_db::models::challenge::Challenge;
use hardtrack_db::models::habit::{CreateHabitDefinition, HabitDefinition, HabitEntry, UpdateHabitDefinition};
use hardtrack_db::repositories::HabitRepo;
use hardtrack_db::DbPool;

use crate::completion;
use crate::error::EngineResult;
use crate::lifecycle;
use crate::logs::enforce_edit_window;

/// Create a habit definition on a challenge.
pub async fn create_definition(
    pool: &DbPool,
    challenge: &Challenge,
    input: &CreateHabitDefinition,
) -> EngineResult<HabitDefinition> {
    habits::validate_block_type(&input.block_type)?;
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Habit name must not be empty".to_string()).into());
    }
    if input.block_type == BLOCK_TYPE_TASK && input.target.is_some() {
        return Err(
            CoreError::Validation("Task habits do not take a target".to_string()).into(),
        );
    }
    if input.block_type == BLOCK_TYPE_COUNTER {
        if let Some(target) = input.target {
            if target < 1 {
                return Err(CoreError::Validation(
                    "Counter target must be at least 1".to_string(),
                )
                .into());
            }
        }
    }
    if input.challenge_id != challenge.id {
        return Err(CoreError::Validation(
            "Habit definition does not belong to this challenge".to_string(),
        )
        .into());
    }

    let definition = HabitRepo::create_definition(pool, input).await?;
    tracing::debug!(
        challenge_id = challenge.id,
        definition_id = definition.id,
        hard = definition.is_hard,
        "habit definition created"
    );
    Ok(definition)
}

/// Update a habit definition's mutable fields.
pub async fn update_definition(
    pool: &DbPool,
    challenge: &Challenge,
    definition_id: i64,
    input: &UpdateHabitDefinition,
) -> EngineResult<HabitDefinition> {
    let existing = HabitRepo::find_definition(pool, definition_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "habit definition",
            id: definition_id,
        })?;
    if existing.challenge_id != challenge.id {
        return Err(CoreError::NotFound {
            entity: "habit definition",
            id: definition_id,
        }
        .into());
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("Habit name must not be empty".to_string()).into());
        }
    }
    if let Some(target) = input.target {
        if target < 1 {
            return Err(
                CoreError::Validation("Counter target must be at least 1".to_string()).into(),
            );
        }
    }

    let updated = HabitRepo::update_definition(pool, definition_id, input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "habit definition",
            id: definition_id,
        })?;
    Ok(updated)
}

/// Check a task habit on or off for one day.
pub async fn toggle_entry(
    pool: &DbPool,
    challenge: &Challenge,
    definition: &HabitDefinition,
    day: i32,
    completed: bool,
    tz: Tz,
) -> EngineResult<HabitEntry> {
    if definition.block_type != BLOCK_TYPE_TASK {
        return Err(CoreError::Validation(format!(
            "Habit '{}' is a counter; send a value instead",
            definition.name
        ))
        .into());
    }
    write_entry(pool, challenge, definition, day, completed, None, tz).await
}

/// Record a counter habit's value for one day.
///
/// `completed` is derived from the value against the definition's
/// target, never taken from the caller.
pub async fn record_counter_entry(
    pool: &DbPool,
    challenge: &Challenge,
    definition: &HabitDefinition,
    day: i32,
    value: i32,
    tz: Tz,
) -> EngineResult<HabitEntry> {
    if definition.block_type != BLOCK_TYPE_COUNTER {
        return Err(CoreError::Validation(format!(
            "Habit '{}' is a task; send a completed flag instead",
            definition.name
        ))
        .into());
    }
    if value < 0 {
        return Err(CoreError::Validation("Counter value must not be negative".to_string()).into());
    }
    let completed = habits::counter_satisfied(value, definition.target);
    write_entry(pool, challenge, definition, day, completed, Some(value), tz).await
}

async fn write_entry(
    pool: &DbPool,
    challenge: &Challenge,
    definition: &HabitDefinition,
    day: i32,
    completed: bool,
    value: Option<i32>,
    tz: Tz,
) -> EngineResult<HabitEntry> {
    challenge::validate_day(day)?;
    if challenge.status != STATUS_ACTIVE {
        return Err(CoreError::Conflict(format!(
            "Challenge {} is {}; its entries are immutable",
            challenge.id, challenge.status
        ))
        .into());
    }
    if definition.challenge_id != challenge.id {
        return Err(CoreError::NotFound {
            entity: "habit definition",
            id: definition.id,
        }
        .into());
    }
    enforce_edit_window(challenge, day, tz)?;

    let was_complete = completion::is_day_complete(pool, challenge, day).await?;
    let entry =
        HabitRepo::upsert_entry(pool, definition.id, day, completed, value).await?;
    let now_complete = completion::is_day_complete(pool, challenge, day).await?;

    if now_complete && !was_complete {
        lifecycle::advance_after_day_complete(pool, challenge, day).await?;
    }
    Ok(entry)
}
