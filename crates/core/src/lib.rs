//! HardTrack domain core.
//!
//! Pure challenge-domain logic with zero internal dependencies so it can
//! be shared by the repository layer, the lifecycle engine, the API, and
//! the sweep worker:
//!
//! - [`day`] — calendar-day arithmetic and the editable-window policy.
//! - [`requirements`] — fixed-model (legacy 8-item) daily evaluation.
//! - [`habits`] — dynamic-model (user-defined habit) evaluation.
//! - [`challenge`] — status/visibility constants and the state machine.
//! - [`streak`] — streak and attempt-number math.
//! - [`milestones`] — the fixed milestone day set.
//! - [`activity`] — activity feed event-type constants.

pub mod activity;
pub mod challenge;
pub mod day;
pub mod error;
pub mod habits;
pub mod milestones;
pub mod requirements;
pub mod streak;
pub mod types;
