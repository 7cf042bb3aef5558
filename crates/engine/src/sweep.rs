//! Periodic status sweep over all active challenges.
//!
//! The lazy check already fires on every authenticated read, so the
//! sweep is a safety net for abandoned accounts: without it, a user who
//! stops opening the app would keep an `active` challenge forever. One
//! pass walks every active challenge in the owner's timezone and lets
//! [`lifecycle::check_challenge_status`] settle each one.

use std::time::Duration;

use chrono_tz::Tz;
use hardtrack_core::challenge::{STATUS_COMPLETED, STATUS_FAILED};
use hardtrack_core::day::DEFAULT_TIMEZONE;
use hardtrack_db::models::challenge::ActiveChallenge;
use hardtrack_db::repositories::ChallengeRepo;
use hardtrack_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::error::EngineResult;
use crate::lifecycle;

/// Tally of one sweep pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SweepOutcome {
    pub checked: usize,
    pub failed: usize,
    pub completed: usize,
    pub errors: usize,
}

/// Run the lazy status check over every active challenge.
///
/// Per-challenge errors are logged and counted but never abort the pass.
pub async fn check_all_active_challenges(pool: &DbPool) -> EngineResult<SweepOutcome> {
    let active = ChallengeRepo::list_active(pool).await?;
    let mut outcome = SweepOutcome::default();

    for challenge in &active {
        outcome.checked += 1;
        match lifecycle::check_challenge_status(pool, challenge.id, owner_zone(challenge)).await {
            Ok(check) if check.status == STATUS_FAILED => outcome.failed += 1,
            Ok(check) if check.status == STATUS_COMPLETED => outcome.completed += 1,
            Ok(_) => {}
            Err(err) => {
                outcome.errors += 1;
                tracing::error!(
                    challenge_id = challenge.id,
                    error = %err,
                    "status check failed during sweep"
                );
            }
        }
    }
    Ok(outcome)
}

/// Resolve the owner's timezone, falling back to UTC on a missing or
/// unparseable preference.
fn owner_zone(challenge: &ActiveChallenge) -> Tz {
    match challenge.timezone.as_deref() {
        Some(tz) => tz.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!(
                challenge_id = challenge.id,
                timezone = tz,
                "stored timezone did not parse; using UTC"
            );
            DEFAULT_TIMEZONE
        }),
        None => DEFAULT_TIMEZONE,
    }
}

/// Interval-driven sweep loop for the worker binary.
pub struct StatusSweeper {
    pool: DbPool,
    interval: Duration,
}

impl StatusSweeper {
    pub fn new(pool: DbPool, interval: Duration) -> Self {
        Self { pool, interval }
    }

    /// Run sweep passes until the token is cancelled. The first tick
    /// fires immediately so a restarted worker catches up right away.
    pub async fn run(self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match check_all_active_challenges(&self.pool).await {
                        Ok(outcome) => {
                            tracing::info!(
                                checked = outcome.checked,
                                failed = outcome.failed,
                                completed = outcome.completed,
                                errors = outcome.errors,
                                "status sweep finished"
                            );
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "status sweep aborted");
                        }
                    }
                }
                _ = cancel.cancelled() => {
                    tracing::info!("status sweeper shutting down");
                    break;
                }
            }
        }
    }
}
