//! Fixed-model daily log writes.
//!
//! Every write goes read -> merge -> evaluate -> upsert: the partial
//! update is merged over the stored row (or defaults for a first write),
//! the eight requirement flags are recomputed from the merged state, and
//! the full field set is written back. Derived flags are never trusted
//! from the caller, so updates commute and the stored row always agrees
//! with its fields.

use chrono_tz::Tz;
use hardtrack_core::challenge::{self, MODEL_FIXED, STATUS_ACTIVE};
use hardtrack_core::day;
use hardtrack_core::error::CoreError;
use hardtrack_core::requirements;
use hardtrack_db::models::challenge::Challenge;
use hardtrack_db::models::daily_log::{DailyLog, DailyLogWrite, UpdateDailyLog};
use hardtrack_db::repositories::DailyLogRepo;
use hardtrack_db::DbPool;

use crate::error::EngineResult;
use crate::lifecycle;

/// Apply a partial update to one challenge day.
///
/// Only fixed-model challenges take log writes; a dynamic challenge's
/// days are judged solely by its habit entries, so a log satisfying the
/// legacy requirements must never reach the advance path there. Also
/// rejects writes to terminal challenges, to days outside 1..=75, to
/// days that have not started yet, and to days whose grace period has
/// expired. When the merged day newly satisfies all requirements the
/// real-time advance path runs (feed event, milestone, day bump or
/// completion).
pub async fn record_daily_log(
    pool: &DbPool,
    challenge: &Challenge,
    day: i32,
    update: &UpdateDailyLog,
    tz: Tz,
) -> EngineResult<DailyLog> {
    challenge::validate_day(day)?;
    if challenge.status != STATUS_ACTIVE {
        return Err(CoreError::Conflict(format!(
            "Challenge {} is {}; its logs are immutable",
            challenge.id, challenge.status
        ))
        .into());
    }
    if challenge.completion_model != MODEL_FIXED {
        return Err(CoreError::Validation(format!(
            "Challenge {} uses the {} completion model; record habit entries instead",
            challenge.id, challenge.completion_model
        ))
        .into());
    }
    enforce_edit_window(challenge, day, tz)?;

    let existing = DailyLogRepo::find(pool, challenge.id, day).await?;
    let was_met = existing
        .as_ref()
        .map(|l| l.all_requirements_met)
        .unwrap_or(false);

    let write = merge_log(existing.as_ref(), update);
    let log = DailyLogRepo::upsert(pool, challenge.id, day, &write).await?;

    if log.all_requirements_met && !was_met {
        lifecycle::advance_after_day_complete(pool, challenge, day).await?;
    }
    Ok(log)
}

/// Reject writes outside the editable window.
///
/// Future days fail validation outright; past days fail with the
/// dedicated window error so clients can distinguish "too late" from
/// "bad input".
pub(crate) fn enforce_edit_window(
    challenge: &Challenge,
    day: i32,
    tz: Tz,
) -> Result<(), CoreError> {
    let today_day = day::day_number(challenge.start_date, day::today_in_zone(tz));
    if day > today_day {
        return Err(CoreError::Validation(format!(
            "Day {day} has not started yet (today is day {today_day})"
        )));
    }
    if day::grace_period_expired(day, today_day) {
        return Err(CoreError::EditWindowClosed { day, today_day });
    }
    Ok(())
}

/// Merge a partial update over the stored row, recomputing derived flags.
fn merge_log(existing: Option<&DailyLog>, update: &UpdateDailyLog) -> DailyLogWrite {
    let mut write = match existing {
        Some(log) => DailyLogWrite {
            workout1_type: log.workout1_type.clone(),
            workout1_name: log.workout1_name.clone(),
            workout1_duration_minutes: log.workout1_duration_minutes,
            workout1_outdoor: log.workout1_outdoor,
            workout2_type: log.workout2_type.clone(),
            workout2_name: log.workout2_name.clone(),
            workout2_duration_minutes: log.workout2_duration_minutes,
            workout2_outdoor: log.workout2_outdoor,
            diet_followed: log.diet_followed,
            no_alcohol: log.no_alcohol,
            water_units: log.water_units,
            reading_minutes: log.reading_minutes,
            photo_ref: log.photo_ref.clone(),
            all_requirements_met: false,
        },
        None => DailyLogWrite::default(),
    };

    if let Some(v) = &update.workout1_type {
        write.workout1_type = Some(v.clone());
    }
    if let Some(v) = &update.workout1_name {
        write.workout1_name = Some(v.clone());
    }
    if let Some(v) = update.workout1_duration_minutes {
        write.workout1_duration_minutes = Some(v);
    }
    if let Some(v) = update.workout1_outdoor {
        write.workout1_outdoor = v;
    }
    if let Some(v) = &update.workout2_type {
        write.workout2_type = Some(v.clone());
    }
    if let Some(v) = &update.workout2_name {
        write.workout2_name = Some(v.clone());
    }
    if let Some(v) = update.workout2_duration_minutes {
        write.workout2_duration_minutes = Some(v);
    }
    if let Some(v) = update.workout2_outdoor {
        write.workout2_outdoor = v;
    }
    if let Some(v) = update.diet_followed {
        write.diet_followed = v;
    }
    if let Some(v) = update.no_alcohol {
        write.no_alcohol = v;
    }
    if let Some(v) = update.water_units {
        write.water_units = v;
    }
    if let Some(v) = update.reading_minutes {
        write.reading_minutes = v;
    }
    if let Some(v) = &update.photo_ref {
        write.photo_ref = Some(v.clone());
    }

    write.all_requirements_met =
        requirements::evaluate(&write.fixed_fields()).all_requirements_met;
    write
}
