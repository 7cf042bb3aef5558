//! Dynamic-model (user-defined habit) completion evaluation.
//!
//! A day is "hard-complete" iff every active habit definition flagged
//! hard has a satisfying entry for that day. Soft habits are tracked but
//! never affect failure evaluation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Block types
// ---------------------------------------------------------------------------

/// Boolean check-off habit.
pub const BLOCK_TYPE_TASK: &str = "task";
/// Numeric habit with an optional target (e.g. water in ounces).
pub const BLOCK_TYPE_COUNTER: &str = "counter";

/// All valid habit block types.
pub const VALID_BLOCK_TYPES: &[&str] = &[BLOCK_TYPE_TASK, BLOCK_TYPE_COUNTER];

/// Validate that a block type string is one of the known block types.
pub fn validate_block_type(bt: &str) -> Result<(), CoreError> {
    if VALID_BLOCK_TYPES.contains(&bt) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown block type: '{bt}'. Valid types: {}",
            VALID_BLOCK_TYPES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// The requirement-bearing view of a habit definition.
#[derive(Debug, Clone)]
pub struct HabitRequirement {
    pub block_type: String,
    pub target: Option<i32>,
    pub is_hard: bool,
}

/// One day's entry against a single habit definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct HabitDayEntry {
    pub completed: bool,
    pub value: Option<i32>,
}

/// Whether a counter value satisfies its target.
///
/// A counter with no stored target is satisfied by any value >= 1.
pub fn counter_satisfied(value: i32, target: Option<i32>) -> bool {
    value >= target.unwrap_or(1)
}

/// Whether `entry` satisfies `requirement` for a single day.
///
/// A missing entry never satisfies. Tasks use the `completed` flag;
/// counters derive completion from `value >= target`.
pub fn entry_satisfies(requirement: &HabitRequirement, entry: Option<&HabitDayEntry>) -> bool {
    let Some(entry) = entry else {
        return false;
    };
    match requirement.block_type.as_str() {
        BLOCK_TYPE_COUNTER => counter_satisfied(entry.value.unwrap_or(0), requirement.target),
        _ => entry.completed,
    }
}

/// A day is hard-complete iff every hard requirement is satisfied.
pub fn hard_day_complete(pairs: &[(HabitRequirement, Option<HabitDayEntry>)]) -> bool {
    pairs
        .iter()
        .filter(|(req, _)| req.is_hard)
        .all(|(req, entry)| entry_satisfies(req, entry.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(is_hard: bool) -> HabitRequirement {
        HabitRequirement {
            block_type: BLOCK_TYPE_TASK.to_string(),
            target: None,
            is_hard,
        }
    }

    fn counter(target: i32, is_hard: bool) -> HabitRequirement {
        HabitRequirement {
            block_type: BLOCK_TYPE_COUNTER.to_string(),
            target: Some(target),
            is_hard,
        }
    }

    fn done() -> Option<HabitDayEntry> {
        Some(HabitDayEntry {
            completed: true,
            value: None,
        })
    }

    fn counted(value: i32) -> Option<HabitDayEntry> {
        Some(HabitDayEntry {
            completed: false,
            value: Some(value),
        })
    }

    // -- block types ----------------------------------------------------------

    #[test]
    fn valid_block_types_accepted() {
        assert!(validate_block_type("task").is_ok());
        assert!(validate_block_type("counter").is_ok());
    }

    #[test]
    fn invalid_block_type_rejected() {
        assert!(validate_block_type("timer").is_err());
    }

    // -- entry_satisfies ------------------------------------------------------

    #[test]
    fn missing_entry_never_satisfies() {
        assert!(!entry_satisfies(&task(true), None));
        assert!(!entry_satisfies(&counter(8, true), None));
    }

    #[test]
    fn task_requires_completed_flag() {
        assert!(entry_satisfies(&task(true), done().as_ref()));
        assert!(!entry_satisfies(
            &task(true),
            Some(HabitDayEntry::default()).as_ref()
        ));
    }

    #[test]
    fn counter_completion_derived_from_value() {
        assert!(entry_satisfies(&counter(8, true), counted(8).as_ref()));
        assert!(entry_satisfies(&counter(8, true), counted(12).as_ref()));
        assert!(!entry_satisfies(&counter(8, true), counted(7).as_ref()));
    }

    #[test]
    fn counter_without_target_satisfied_by_any_positive_value() {
        let req = HabitRequirement {
            block_type: BLOCK_TYPE_COUNTER.to_string(),
            target: None,
            is_hard: true,
        };
        assert!(entry_satisfies(&req, counted(1).as_ref()));
        assert!(!entry_satisfies(&req, counted(0).as_ref()));
    }

    // -- hard_day_complete ----------------------------------------------------

    #[test]
    fn all_hard_satisfied_soft_ignored() {
        // 5 hard habits complete, 2 soft habits incomplete: the day
        // still counts as complete for failure evaluation.
        let pairs = vec![
            (task(true), done()),
            (task(true), done()),
            (task(true), done()),
            (counter(8, true), counted(9)),
            (counter(100, true), counted(100)),
            (task(false), None),
            (counter(30, false), counted(2)),
        ];
        assert!(hard_day_complete(&pairs));
    }

    #[test]
    fn one_unsatisfied_hard_habit_fails_the_day() {
        let pairs = vec![
            (task(true), done()),
            (counter(8, true), counted(7)),
            (task(false), done()),
        ];
        assert!(!hard_day_complete(&pairs));
    }

    #[test]
    fn no_hard_habits_means_vacuously_complete() {
        let pairs = vec![(task(false), None)];
        assert!(hard_day_complete(&pairs));
    }
}
