//! Daily log (fixed model) entity model and DTOs.

use hardtrack_core::requirements::FixedFields;
use hardtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full daily log row from the `daily_logs` table.
///
/// `all_requirements_met` always equals the AND of the eight underlying
/// conditions as of the last write; it is recomputed on every update and
/// must never be written from partial inputs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyLog {
    pub id: DbId,
    pub challenge_id: DbId,
    pub day: i32,
    pub workout1_type: Option<String>,
    pub workout1_name: Option<String>,
    pub workout1_duration_minutes: Option<i32>,
    pub workout1_outdoor: bool,
    pub workout2_type: Option<String>,
    pub workout2_name: Option<String>,
    pub workout2_duration_minutes: Option<i32>,
    pub workout2_outdoor: bool,
    pub diet_followed: bool,
    pub no_alcohol: bool,
    pub water_units: i32,
    pub reading_minutes: i32,
    /// Opaque object-storage reference; only presence matters here.
    pub photo_ref: Option<String>,
    pub all_requirements_met: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial update to a day's fixed-model fields. Only non-`None` fields
/// are applied; derived flags are recomputed from the merged state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDailyLog {
    pub workout1_type: Option<String>,
    pub workout1_name: Option<String>,
    pub workout1_duration_minutes: Option<i32>,
    pub workout1_outdoor: Option<bool>,
    pub workout2_type: Option<String>,
    pub workout2_name: Option<String>,
    pub workout2_duration_minutes: Option<i32>,
    pub workout2_outdoor: Option<bool>,
    pub diet_followed: Option<bool>,
    pub no_alcohol: Option<bool>,
    pub water_units: Option<i32>,
    pub reading_minutes: Option<i32>,
    pub photo_ref: Option<String>,
}

/// The full merged field set written by an upsert, with derived flags
/// already recomputed by the engine.
#[derive(Debug, Clone, Default)]
pub struct DailyLogWrite {
    pub workout1_type: Option<String>,
    pub workout1_name: Option<String>,
    pub workout1_duration_minutes: Option<i32>,
    pub workout1_outdoor: bool,
    pub workout2_type: Option<String>,
    pub workout2_name: Option<String>,
    pub workout2_duration_minutes: Option<i32>,
    pub workout2_outdoor: bool,
    pub diet_followed: bool,
    pub no_alcohol: bool,
    pub water_units: i32,
    pub reading_minutes: i32,
    pub photo_ref: Option<String>,
    pub all_requirements_met: bool,
}

impl DailyLogWrite {
    /// Project the requirement-bearing fields for re-evaluation.
    pub fn fixed_fields(&self) -> FixedFields {
        FixedFields {
            workout1_duration_minutes: self.workout1_duration_minutes,
            workout1_outdoor: self.workout1_outdoor,
            workout2_duration_minutes: self.workout2_duration_minutes,
            workout2_outdoor: self.workout2_outdoor,
            diet_followed: self.diet_followed,
            no_alcohol: self.no_alcohol,
            water_units: self.water_units,
            reading_minutes: self.reading_minutes,
            has_photo: self.photo_ref.is_some(),
        }
    }
}
