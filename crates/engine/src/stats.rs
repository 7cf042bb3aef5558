//! Lifetime statistics projection.

use hardtrack_core::error::CoreError;
use hardtrack_core::streak;
use hardtrack_core::types::DbId;
use hardtrack_db::models::user::User;
use hardtrack_db::repositories::ChallengeRepo;
use hardtrack_db::DbPool;
use serde::Serialize;

use crate::completion;
use crate::error::EngineResult;

/// A user's streak and attempt statistics.
#[derive(Debug, Clone, Serialize)]
pub struct LifetimeStats {
    /// Consecutive complete days from day 1 of the active challenge;
    /// zero when no challenge is active.
    pub current_streak: i32,
    /// Best streak across every attempt, maintained on fail/complete.
    pub longest_streak: i32,
    /// 1-based attempt number (restart count + 1).
    pub attempt_number: i32,
    pub active_challenge_id: Option<DbId>,
    pub current_day: Option<i32>,
}

/// Compute lifetime stats for a user.
///
/// The current streak is derived on read from the day-completion map of
/// the active challenge, so it never goes stale when a past day's log is
/// edited inside its grace window.
pub async fn lifetime_stats(pool: &DbPool, user: &User) -> EngineResult<LifetimeStats> {
    let mut current_streak = 0;
    let mut current_day = None;

    if let Some(challenge_id) = user.current_challenge_id {
        let challenge = ChallengeRepo::find_by_id(pool, challenge_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "challenge",
                id: challenge_id,
            })?;
        let complete = completion::day_completion_map(pool, &challenge, challenge.current_day)
            .await?;
        current_streak = streak::current_streak(&complete);
        current_day = Some(challenge.current_day);
    }

    Ok(LifetimeStats {
        current_streak,
        longest_streak: user.longest_streak,
        attempt_number: streak::attempt_number(user.lifetime_restart_count),
        active_challenge_id: user.current_challenge_id,
        current_day,
    })
}
