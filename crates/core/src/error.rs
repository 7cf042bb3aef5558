use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Starting a challenge while another one is still active.
    #[error("User already has an active challenge (id {challenge_id})")]
    ActiveChallengeExists { challenge_id: DbId },

    /// Write against a day whose grace period has expired. Expected and
    /// recoverable: callers should render a "this day is locked" message.
    #[error("Day {day} can no longer be edited (today is day {today_day})")]
    EditWindowClosed { day: i32, today_day: i32 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
