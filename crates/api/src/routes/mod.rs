pub mod challenges;
pub mod feed;
pub mod health;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /challenges                                       start, list history
/// /challenges/current                               active challenge (lazy-checked)
/// /challenges/{id}                                  get (lazy-checked)
/// /challenges/{id}/check                            explicit status check (POST)
/// /challenges/{id}/days                             per-day completion + edit window
/// /challenges/{id}/logs                             list daily logs
/// /challenges/{id}/logs/{day}                       partial update (PUT)
/// /challenges/{id}/habits                           list, create
/// /challenges/{id}/habits/{habit_id}                update (PUT)
/// /challenges/{id}/habits/{habit_id}/entries/{day}  toggle/record entry (PUT)
///
/// /stats                                            lifetime statistics
/// /feed                                             activity feed (paginated)
///
/// /users/me                                         profile
/// /users/me/settings                                update preferences (PUT)
/// ```
///
/// Everything here requires a Bearer token; only `/health` (mounted at
/// the root, outside this tree) is public.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/challenges", challenges::router())
        .merge(stats::router())
        .merge(feed::router())
        .merge(users::router())
}
