//! HardTrack challenge lifecycle engine.
//!
//! Sits between the repository layer and the API/worker binaries:
//!
//! - [`lifecycle`] — start/fail/complete transitions and the lazy
//!   status-check algorithm.
//! - [`logs`] — fixed-model partial updates with derived-flag
//!   recomputation and edit-window enforcement.
//! - [`habits`] — dynamic-model definition and entry writes.
//! - [`completion`] — the single "is day N complete" projection.
//! - [`stats`] — lifetime statistics.
//! - [`feed`] — activity feed recording.
//! - [`sweep`] — the periodic check over all active challenges.

pub mod completion;
pub mod error;
pub mod feed;
pub mod habits;
pub mod lifecycle;
pub mod logs;
pub mod stats;
pub mod sweep;

pub use error::{EngineError, EngineResult};
