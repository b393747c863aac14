//! Route definitions, grouped by resource.
//!
//! Versioned API route tree (mounted under `/api/v1`):
//!
//! ```text
//! /auth
//!   POST /login              -- email + password -> token pair
//!   POST /refresh            -- rotate a refresh token
//!   POST /logout             -- revoke the caller's session
//!   POST /sessions/cleanup   -- purge long-expired sessions (admin)
//! /users
//!   POST /                   -- register (open)
//!   GET  /                   -- list users (admin)
//!   GET  /me                 -- caller's own profile
//! /transactions
//!   POST /                   -- record a transaction
//!   GET  /                   -- list the caller's transactions
//! ```
//!
//! Health and info live at the root, outside the versioned prefix; see
//! [`health::health_routes`].

pub mod auth;
pub mod health;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes, to be nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::auth_routes())
        .nest("/users", users::user_routes())
        .nest("/transactions", transactions::transaction_routes())
}
