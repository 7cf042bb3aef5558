//! Route definitions for `/users/me`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::me))
        .route("/users/me/settings", put(users::update_settings))
}
