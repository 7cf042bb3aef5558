//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-table mutations
//! that must move together (challenge status + the owner's bookkeeping)
//! run inside a single transaction within the repository method.

pub mod activity_feed_repo;
pub mod challenge_repo;
pub mod daily_log_repo;
pub mod habit_repo;
pub mod user_repo;

pub use activity_feed_repo::ActivityFeedRepo;
pub use challenge_repo::ChallengeRepo;
pub use daily_log_repo::DailyLogRepo;
pub use habit_repo::HabitRepo;
pub use user_repo::UserRepo;
