//! Entity models and DTOs.

pub mod activity;
pub mod challenge;
pub mod daily_log;
pub mod habit;
pub mod user;
