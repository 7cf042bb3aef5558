//! Challenge status, visibility, and completion-model constants, plus the
//! status state machine.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! the repository layer, the lifecycle engine, and the sweep worker.

use crate::day::CHALLENGE_DAYS;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// All valid challenge statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_COMPLETED, STATUS_FAILED];

/// Returns the set of valid target statuses reachable from `from`.
///
/// `completed` and `failed` are terminal and return an empty slice.
pub fn valid_transitions(from: &str) -> &'static [&'static str] {
    match from {
        STATUS_ACTIVE => &[STATUS_COMPLETED, STATUS_FAILED],
        _ => &[],
    }
}

/// Whether a status permits no further transitions.
pub fn is_terminal(status: &str) -> bool {
    valid_transitions(status).is_empty()
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

pub const VISIBILITY_PRIVATE: &str = "private";
pub const VISIBILITY_FRIENDS: &str = "friends";
pub const VISIBILITY_PUBLIC: &str = "public";

/// All valid challenge visibilities.
pub const VALID_VISIBILITIES: &[&str] =
    &[VISIBILITY_PRIVATE, VISIBILITY_FRIENDS, VISIBILITY_PUBLIC];

/// Validate that a visibility string is one of the known values.
pub fn validate_visibility(v: &str) -> Result<(), CoreError> {
    if VALID_VISIBILITIES.contains(&v) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown visibility: '{v}'. Valid values: {}",
            VALID_VISIBILITIES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Completion model
// ---------------------------------------------------------------------------

/// Legacy hardcoded 8-item requirement set.
pub const MODEL_FIXED: &str = "fixed";
/// User-configured habit-definition list.
pub const MODEL_DYNAMIC: &str = "dynamic";

/// All valid completion models.
pub const VALID_COMPLETION_MODELS: &[&str] = &[MODEL_FIXED, MODEL_DYNAMIC];

/// Validate that a completion model string is one of the known values.
pub fn validate_completion_model(m: &str) -> Result<(), CoreError> {
    if VALID_COMPLETION_MODELS.contains(&m) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown completion model: '{m}'. Valid values: {}",
            VALID_COMPLETION_MODELS.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Day validation
// ---------------------------------------------------------------------------

/// Validate a 1-based challenge day number.
pub fn validate_day(day: i32) -> Result<(), CoreError> {
    if (1..=CHALLENGE_DAYS).contains(&day) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Day must be between 1 and {CHALLENGE_DAYS}, got {day}"
        )))
    }
}

/// Clamp a computed day number into the valid `[1, 75]` range.
pub fn clamp_day(day: i32) -> i32 {
    day.clamp(1, CHALLENGE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- state machine --------------------------------------------------------

    #[test]
    fn active_can_complete_or_fail() {
        assert_eq!(
            valid_transitions(STATUS_ACTIVE),
            &[STATUS_COMPLETED, STATUS_FAILED][..]
        );
        assert!(!is_terminal(STATUS_ACTIVE));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(valid_transitions(STATUS_COMPLETED).is_empty());
        assert!(is_terminal(STATUS_COMPLETED));
    }

    #[test]
    fn failed_is_terminal() {
        assert!(valid_transitions(STATUS_FAILED).is_empty());
        assert!(is_terminal(STATUS_FAILED));
    }

    // -- validation -----------------------------------------------------------

    #[test]
    fn known_visibilities_accepted() {
        assert!(validate_visibility("private").is_ok());
        assert!(validate_visibility("friends").is_ok());
        assert!(validate_visibility("public").is_ok());
    }

    #[test]
    fn unknown_visibility_rejected() {
        assert!(validate_visibility("everyone").is_err());
    }

    #[test]
    fn known_completion_models_accepted() {
        assert!(validate_completion_model("fixed").is_ok());
        assert!(validate_completion_model("dynamic").is_ok());
    }

    #[test]
    fn unknown_completion_model_rejected() {
        assert!(validate_completion_model("hybrid").is_err());
    }

    #[test]
    fn day_range_enforced() {
        assert!(validate_day(1).is_ok());
        assert!(validate_day(75).is_ok());
        assert!(validate_day(0).is_err());
        assert!(validate_day(76).is_err());
    }

    #[test]
    fn clamp_day_bounds() {
        assert_eq!(clamp_day(-3), 1);
        assert_eq!(clamp_day(40), 40);
        assert_eq!(clamp_day(90), 75);
    }
}
