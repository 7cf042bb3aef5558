//! Habit definition and entry (dynamic model) entity models and DTOs.

use hardtrack_core::habits::{HabitDayEntry, HabitRequirement};
use hardtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full habit definition row from the `habit_definitions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HabitDefinition {
    pub id: DbId,
    pub challenge_id: DbId,
    pub name: String,
    /// `task` or `counter`.
    pub block_type: String,
    /// Counter target; `None` for tasks.
    pub target: Option<i32>,
    pub unit: Option<String>,
    /// Hard habits are load-bearing for failure; soft ones are tracked only.
    pub is_hard: bool,
    pub is_active: bool,
    pub sort_order: i32,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HabitDefinition {
    /// Project the requirement-bearing view for evaluation.
    pub fn requirement(&self) -> HabitRequirement {
        HabitRequirement {
            block_type: self.block_type.clone(),
            target: self.target,
            is_hard: self.is_hard,
        }
    }
}

/// Full habit entry row from the `habit_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HabitEntry {
    pub id: DbId,
    pub habit_definition_id: DbId,
    pub day: i32,
    pub completed: bool,
    pub value: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HabitEntry {
    /// Project the day-entry view for evaluation.
    pub fn day_entry(&self) -> HabitDayEntry {
        HabitDayEntry {
            completed: self.completed,
            value: self.value,
        }
    }
}

/// DTO for creating a habit definition.
#[derive(Debug, Deserialize)]
pub struct CreateHabitDefinition {
    pub challenge_id: DbId,
    pub name: String,
    pub block_type: String,
    pub target: Option<i32>,
    pub unit: Option<String>,
    pub is_hard: bool,
    pub sort_order: Option<i32>,
    pub category: Option<String>,
}

/// DTO for updating a habit definition. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHabitDefinition {
    pub name: Option<String>,
    pub target: Option<i32>,
    pub unit: Option<String>,
    pub is_hard: Option<bool>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub category: Option<String>,
}
