//! User registration and profile routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::users::register).get(handlers::users::list),
        )
        .route("/me", get(handlers::users::me))
}
