//! Handlers for the `/auth` resource (login, refresh, logout, cleanup).
//!
//! Thin HTTP shims over [`crate::auth::service`]; all lifecycle decisions
//! live there. Handlers supply the wall clock and the client IP.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::service::{self, TokenPair};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// Response body for `POST /auth/logout`. Boolean outcome only, no detail.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

/// Response body for `POST /auth/sessions/cleanup`.
#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub deleted: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    let ip = client_ip(&headers);
    let pair = service::login(&state, &input.email, &input.password, ip, Utc::now()).await?;
    Ok(Json(pair))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new token pair. The presented
/// token is consumed by the rotation.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let ip = client_ip(&headers);
    let pair = service::refresh(&state, &input.refresh_token, ip, Utc::now()).await?;
    Ok(Json(pair))
}

/// POST /api/v1/auth/logout
///
/// Revoke the caller's session for the presented refresh token. The lookup
/// is keyed by (token hash, caller id), so a token belonging to someone
/// else reports `revoked: false` like any other miss.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<LogoutRequest>,
) -> AppResult<Json<LogoutResponse>> {
    let revoked = service::logout(&state, auth_user.id, &input.refresh_token, Utc::now()).await?;
    Ok(Json(LogoutResponse { revoked }))
}

/// POST /api/v1/auth/sessions/cleanup
///
/// Delete sessions past expiry plus the grace period. Admin only;
/// operator-triggered rather than scheduled.
pub async fn cleanup(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<CleanupResponse>> {
    let deleted = service::cleanup(&state, Utc::now()).await?;
    Ok(Json(CleanupResponse { deleted }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Best-effort client IP, informational only. Takes the first entry of
/// `X-Forwarded-For` when a proxy supplies it.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
