//! Challenge lifecycle transitions and the lazy status check.
//!
//! There is no scheduled job per user; a challenge's true status is
//! discovered either on read (API handlers call [`check_challenge_status`]
//! before serving challenge state) or by the periodic sweep. Both paths
//! converge on the same idempotent repository transitions, so running the
//! check twice, or concurrently, settles on one outcome.

use chrono::NaiveDate;
use chrono_tz::Tz;
use hardtrack_core::challenge::{self, MODEL_FIXED, STATUS_ACTIVE, STATUS_COMPLETED, STATUS_FAILED};
use hardtrack_core::day::{self, CHALLENGE_DAYS, GRACE_DAYS};
use hardtrack_core::error::CoreError;
use hardtrack_core::milestones;
use hardtrack_core::types::DbId;
use hardtrack_db::models::challenge::{Challenge, CreateChallenge};
use hardtrack_db::repositories::ChallengeRepo;
use hardtrack_db::DbPool;

use crate::completion;
use crate::error::EngineResult;
use crate::feed;

/// Outcome of a lazy status check.
#[derive(Debug, Clone)]
pub struct StatusCheck {
    pub status: String,
    pub failed_on_day: Option<i32>,
    pub current_day: i32,
}

/// Start a new challenge for a user.
///
/// Rejects with [`CoreError::ActiveChallengeExists`] when the user
/// already has an active challenge; a concurrent double start that slips
/// past this read is caught by the partial unique index instead.
pub async fn start_challenge(
    pool: &DbPool,
    user_id: DbId,
    start_date: NaiveDate,
    visibility: &str,
    completion_model: Option<&str>,
) -> EngineResult<Challenge> {
    challenge::validate_visibility(visibility)?;
    let model = completion_model.unwrap_or(MODEL_FIXED);
    challenge::validate_completion_model(model)?;

    if let Some(existing) = ChallengeRepo::find_active_for_user(pool, user_id).await? {
        return Err(CoreError::ActiveChallengeExists {
            challenge_id: existing.id,
        }
        .into());
    }

    let created = ChallengeRepo::create_active(
        pool,
        &CreateChallenge {
            user_id,
            start_date,
            visibility: visibility.to_string(),
            completion_model: model.to_string(),
        },
    )
    .await?;

    feed::record_challenge_started(pool, user_id, created.id).await?;
    tracing::info!(
        user_id,
        challenge_id = created.id,
        %start_date,
        model,
        "challenge started"
    );
    Ok(created)
}

/// Fail a challenge on the given day.
///
/// Returns `true` only when this call performed the transition; the feed
/// event is recorded exactly once, by the winner.
pub async fn fail_challenge(
    pool: &DbPool,
    challenge: &Challenge,
    failed_on_day: i32,
) -> EngineResult<bool> {
    let transitioned = ChallengeRepo::fail(pool, challenge.id, failed_on_day).await?;
    if transitioned {
        feed::record_challenge_failed(pool, challenge.user_id, challenge.id, failed_on_day)
            .await?;
        tracing::info!(
            challenge_id = challenge.id,
            failed_on_day,
            "challenge failed"
        );
    }
    Ok(transitioned)
}

/// Complete a challenge. Same once-only contract as [`fail_challenge`].
pub async fn complete_challenge(pool: &DbPool, challenge: &Challenge) -> EngineResult<bool> {
    let transitioned = ChallengeRepo::complete(pool, challenge.id).await?;
    if transitioned {
        feed::record_challenge_completed(pool, challenge.user_id, challenge.id).await?;
        tracing::info!(challenge_id = challenge.id, "challenge completed");
    }
    Ok(transitioned)
}

/// Lazily evaluate a challenge's true status as of today in `tz`.
///
/// Scans expired days (those whose grace period has passed) in ascending
/// order; the earliest incomplete expired day fails the challenge, no
/// matter what happened on later days. With no expired miss and the
/// calendar past day 75, a fully complete challenge transitions to
/// completed. Otherwise `current_day` is synced to the calendar.
pub async fn check_challenge_status(
    pool: &DbPool,
    challenge_id: DbId,
    tz: Tz,
) -> EngineResult<StatusCheck> {
    let challenge = ChallengeRepo::find_by_id(pool, challenge_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "challenge",
            id: challenge_id,
        })?;

    // Terminal states are immutable; report them as stored.
    if challenge::is_terminal(&challenge.status) {
        return Ok(StatusCheck {
            status: challenge.status.clone(),
            failed_on_day: challenge.failed_on_day,
            current_day: challenge.current_day,
        });
    }

    let today_day = day::day_number(challenge.start_date, day::today_in_zone(tz));
    // The newest day whose grace period has fully expired.
    let last_expired_day = today_day - GRACE_DAYS - 1;

    if last_expired_day >= 1 {
        let scan_through = last_expired_day.min(CHALLENGE_DAYS);
        let complete = completion::day_completion_map(pool, &challenge, scan_through).await?;

        for (idx, done) in complete.iter().enumerate() {
            if !done {
                let missed_day = idx as i32 + 1;
                fail_challenge(pool, &challenge, missed_day).await?;
                return Ok(StatusCheck {
                    status: STATUS_FAILED.to_string(),
                    failed_on_day: Some(missed_day),
                    current_day: challenge.current_day,
                });
            }
        }

        if today_day > CHALLENGE_DAYS {
            // No expired miss; the challenge completes once all 75 days
            // check out, including those still inside their grace window.
            let full = completion::day_completion_map(pool, &challenge, CHALLENGE_DAYS).await?;
            if full.iter().all(|&done| done) {
                complete_challenge(pool, &challenge).await?;
                return Ok(StatusCheck {
                    status: STATUS_COMPLETED.to_string(),
                    failed_on_day: None,
                    current_day: CHALLENGE_DAYS,
                });
            }
        }
    }

    let synced = challenge::clamp_day(today_day.max(1));
    if synced != challenge.current_day {
        ChallengeRepo::sync_current_day(pool, challenge.id, synced).await?;
    }
    Ok(StatusCheck {
        status: STATUS_ACTIVE.to_string(),
        failed_on_day: None,
        current_day: synced,
    })
}

/// Real-time advance path, called when `day` has just become complete.
///
/// Records the (deduplicated) `day_completed` feed event, posts a
/// milestone event where one applies, and either bumps `current_day` or,
/// on the final day, completes the challenge outright.
pub async fn advance_after_day_complete(
    pool: &DbPool,
    challenge: &Challenge,
    day: i32,
) -> EngineResult<()> {
    feed::record_day_completed(pool, challenge.user_id, challenge.id, day).await?;

    if day >= CHALLENGE_DAYS {
        complete_challenge(pool, challenge).await?;
        return Ok(());
    }

    if milestones::is_milestone(day) {
        feed::record_milestone(pool, challenge.user_id, challenge.id, day).await?;
    }

    let next = challenge::clamp_day(day + 1);
    if next > challenge.current_day {
        ChallengeRepo::sync_current_day(pool, challenge.id, next).await?;
    }
    Ok(())
}
