//! Transaction routes. All of them require an active account.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn transaction_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::transactions::list).post(handlers::transactions::create),
    )
}
