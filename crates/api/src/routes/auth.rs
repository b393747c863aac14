//! Authentication and session-lifecycle routes.

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/logout", post(handlers::auth::logout))
        .route("/sessions/cleanup", post(handlers::auth::cleanup))
}
