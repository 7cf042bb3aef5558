//! HTTP handlers, grouped by resource.

pub mod challenges;
pub mod feed;
pub mod habits;
pub mod logs;
pub mod stats;
pub mod users;

use chrono_tz::Tz;
use hardtrack_core::day::DEFAULT_TIMEZONE;
use hardtrack_core::error::CoreError;
use hardtrack_core::types::DbId;
use hardtrack_db::models::challenge::Challenge;
use hardtrack_db::models::user::User;
use hardtrack_db::repositories::{ChallengeRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Load the authenticated user's row.
pub(crate) async fn load_user(state: &AppState, auth: &AuthUser) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))
}

/// Resolve a user's timezone preference, falling back to UTC.
///
/// Bad stored values fall back rather than erroring; settings updates
/// validate the string, so this only happens for legacy rows.
pub(crate) fn user_zone(user: &User) -> Tz {
    user.timezone
        .as_deref()
        .and_then(|tz| tz.parse::<Tz>().ok())
        .unwrap_or(DEFAULT_TIMEZONE)
}

/// Load a challenge and verify the authenticated user owns it.
pub(crate) async fn load_owned_challenge(
    state: &AppState,
    auth: &AuthUser,
    challenge_id: DbId,
) -> AppResult<Challenge> {
    let challenge = ChallengeRepo::find_by_id(&state.pool, challenge_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Challenge",
            id: challenge_id,
        }))?;
    if challenge.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Challenge belongs to another user".into(),
        )));
    }
    Ok(challenge)
}
