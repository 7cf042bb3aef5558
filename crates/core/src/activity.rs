//! Activity feed event-type constants.
//!
//! The database enforces the closed set with a CHECK constraint; the
//! engine only ever writes these constants.

pub const EVENT_CHALLENGE_STARTED: &str = "challenge_started";
pub const EVENT_DAY_COMPLETED: &str = "day_completed";
pub const EVENT_CHALLENGE_COMPLETED: &str = "challenge_completed";
pub const EVENT_CHALLENGE_FAILED: &str = "challenge_failed";
pub const EVENT_MILESTONE: &str = "milestone";
