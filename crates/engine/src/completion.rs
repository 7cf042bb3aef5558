//! Day-completion projection.
//!
//! The single place that answers "is day N complete", branching on the
//! challenge's tagged completion model. Fixed challenges read the
//! derived flag off the daily log; dynamic challenges require every
//! active hard habit to be satisfied for the day. Soft habits and
//! missing entries on a fixed challenge never enter the verdict.

use std::collections::{HashMap, HashSet};

use hardtrack_core::challenge::{self, MODEL_DYNAMIC};
use hardtrack_core::habits::{self, HabitDayEntry, HabitRequirement};
use hardtrack_db::models::challenge::Challenge;
use hardtrack_db::repositories::{DailyLogRepo, HabitRepo};
use hardtrack_db::DbPool;

use crate::error::EngineResult;

/// Whether one challenge day counts as complete.
pub async fn is_day_complete(
    pool: &DbPool,
    challenge: &Challenge,
    day: i32,
) -> EngineResult<bool> {
    challenge::validate_day(day)?;
    let map = day_completion_map(pool, challenge, day).await?;
    Ok(map[day as usize - 1])
}

/// Completion flags for days `1..=through_day`, index 0 being day 1.
///
/// Loads the challenge's logs or habit entries once and evaluates the
/// whole range in memory, so lazy status scans stay at a constant number
/// of queries regardless of how many days they cover.
pub async fn day_completion_map(
    pool: &DbPool,
    challenge: &Challenge,
    through_day: i32,
) -> EngineResult<Vec<bool>> {
    let through = challenge::clamp_day(through_day);

    if challenge.completion_model == MODEL_DYNAMIC {
        let definitions = HabitRepo::list_definitions(pool, challenge.id, true).await?;
        let hard: Vec<HabitRequirement> = definitions
            .iter()
            .filter(|d| d.is_hard)
            .map(|d| d.requirement())
            .collect();
        let hard_ids: Vec<i64> = definitions
            .iter()
            .filter(|d| d.is_hard)
            .map(|d| d.id)
            .collect();

        let entries = HabitRepo::list_entries_for_challenge(pool, challenge.id).await?;
        let by_key: HashMap<(i64, i32), HabitDayEntry> = entries
            .iter()
            .map(|e| ((e.habit_definition_id, e.day), e.day_entry()))
            .collect();

        let map = (1..=through)
            .map(|day| {
                let pairs: Vec<(HabitRequirement, Option<HabitDayEntry>)> = hard
                    .iter()
                    .zip(hard_ids.iter())
                    .map(|(req, id)| (req.clone(), by_key.get(&(*id, day)).copied()))
                    .collect();
                habits::hard_day_complete(&pairs)
            })
            .collect();
        Ok(map)
    } else {
        let logs = DailyLogRepo::list_for_challenge(pool, challenge.id).await?;
        let met: HashSet<i32> = logs
            .iter()
            .filter(|l| l.all_requirements_met)
            .map(|l| l.day)
            .collect();
        Ok((1..=through).map(|d| met.contains(&d)).collect())
    }
}
