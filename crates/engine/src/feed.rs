//! Activity feed recording.
//!
//! Lifecycle events append unconditionally; `day_completed` goes through
//! the deduplicating repository path so re-edits of an already-celebrated
//! day never produce a second feed row.

use hardtrack_core::activity::{
    EVENT_CHALLENGE_COMPLETED, EVENT_CHALLENGE_FAILED, EVENT_CHALLENGE_STARTED, EVENT_MILESTONE,
};
use hardtrack_core::day::CHALLENGE_DAYS;
use hardtrack_core::types::DbId;
use hardtrack_db::repositories::ActivityFeedRepo;
use hardtrack_db::DbPool;

use crate::error::EngineResult;

pub async fn record_challenge_started(
    pool: &DbPool,
    user_id: DbId,
    challenge_id: DbId,
) -> EngineResult<DbId> {
    let message = format!("Started a new {CHALLENGE_DAYS}-day challenge");
    let id = ActivityFeedRepo::insert(
        pool,
        user_id,
        challenge_id,
        EVENT_CHALLENGE_STARTED,
        None,
        &message,
    )
    .await?;
    Ok(id)
}

pub async fn record_day_completed(
    pool: &DbPool,
    user_id: DbId,
    challenge_id: DbId,
    day: i32,
) -> EngineResult<DbId> {
    let message = format!("Completed day {day}");
    let id = ActivityFeedRepo::insert_day_completed(pool, user_id, challenge_id, day, &message)
        .await?;
    Ok(id)
}

pub async fn record_milestone(
    pool: &DbPool,
    user_id: DbId,
    challenge_id: DbId,
    day: i32,
) -> EngineResult<DbId> {
    let message = format!("Reached the day-{day} milestone");
    let id = ActivityFeedRepo::insert(
        pool,
        user_id,
        challenge_id,
        EVENT_MILESTONE,
        Some(day),
        &message,
    )
    .await?;
    Ok(id)
}

pub async fn record_challenge_failed(
    pool: &DbPool,
    user_id: DbId,
    challenge_id: DbId,
    failed_on_day: i32,
) -> EngineResult<DbId> {
    let message = format!("Challenge failed on day {failed_on_day}");
    let id = ActivityFeedRepo::insert(
        pool,
        user_id,
        challenge_id,
        EVENT_CHALLENGE_FAILED,
        Some(failed_on_day),
        &message,
    )
    .await?;
    Ok(id)
}

pub async fn record_challenge_completed(
    pool: &DbPool,
    user_id: DbId,
    challenge_id: DbId,
) -> EngineResult<DbId> {
    let message = format!("Finished all {CHALLENGE_DAYS} days");
    let id = ActivityFeedRepo::insert(
        pool,
        user_id,
        challenge_id,
        EVENT_CHALLENGE_COMPLETED,
        Some(CHALLENGE_DAYS),
        &message,
    )
    .await?;
    Ok(id)
}
