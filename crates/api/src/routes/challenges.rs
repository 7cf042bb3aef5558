//! Route definitions for the `/challenges` nest.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{challenges, habits, logs};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(challenges::start).get(challenges::list))
        .route("/current", get(challenges::current))
        .route("/{id}", get(challenges::get_by_id))
        .route("/{id}/check", post(challenges::check))
        .route("/{id}/days", get(logs::days))
        .route("/{id}/logs", get(logs::list))
        .route("/{id}/logs/{day}", put(logs::upsert))
        .route("/{id}/habits", get(habits::list).post(habits::create))
        .route("/{id}/habits/{habit_id}", put(habits::update))
        .route(
            "/{id}/habits/{habit_id}/entries/{day}",
            put(habits::upsert_entry),
        )
}
