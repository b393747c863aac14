//! Session lifecycle: login, refresh rotation, logout, and cleanup.
//!
//! A (user, refresh-credential) pair moves NONE -> ACTIVE -> REVOKED, or
//! ACTIVE -> EXPIRED by time passage (detected lazily at lookup). Each
//! successful login or refresh revokes every prior active session for the
//! user before creating the new one, so at most one refresh session is
//! active per user and every refresh secret is single-use.

use chrono::Duration;
use fintrack_core::error::CoreError;
use fintrack_core::types::{DbId, Timestamp};
use fintrack_db::models::session::CreateSession;
use fintrack_db::models::user::User;
use fintrack_db::repositories::{SessionRepo, UserRepo};
use serde::Serialize;

use crate::auth::password::verify_password;
use crate::auth::refresh::{generate_refresh_secret, hash_refresh_secret};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Successful login/refresh outcome handed back to the HTTP layer.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub token_type: &'static str,
    pub refresh_token: String,
}

/// Authenticate an email/password pair and start a fresh session.
///
/// Unknown email and wrong password are deliberately indistinguishable.
/// An inactive account is only revealed after the password proves the
/// caller's identity.
pub async fn login(
    state: &AppState,
    email: &str,
    password: &str,
    ip: Option<String>,
    now: Timestamp,
) -> AppResult<TokenPair> {
    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| {
            tracing::debug!("login failed: unknown email");
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !verify_password(password, &user.password_hash) {
        tracing::debug!(user_id = user.id, "login failed: password mismatch");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    if !user.is_active {
        tracing::info!(user_id = user.id, "login rejected: account deactivated");
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let pair = rotate_session(state, &user, ip, now, None).await?;
    tracing::info!(user_id = user.id, "login succeeded");
    Ok(pair)
}

/// Exchange a refresh secret for a new token pair, rotating the session.
///
/// The presented secret is single-use: the rotation revokes its session, so
/// replaying it finds no active session and fails.
pub async fn refresh(
    state: &AppState,
    refresh_secret: &str,
    ip: Option<String>,
    now: Timestamp,
) -> AppResult<TokenPair> {
    let token_hash = hash_refresh_secret(refresh_secret, &state.config.auth.refresh_pepper);

    let session = SessionRepo::find_active_by_hash(&state.pool, &token_hash, now)
        .await?
        .ok_or_else(|| {
            tracing::debug!("refresh failed: no active session for digest");
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(session_id = session.id, "refresh failed: user gone");
            AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
        })?;

    if !user.is_active {
        tracing::info!(user_id = user.id, "refresh rejected: account deactivated");
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    rotate_session(state, &user, ip, now, Some(session.id)).await
}

/// Revoke the caller's session matching the presented refresh secret.
///
/// Returns `false` if no matching active session exists -- already logged
/// out, wrong secret, or a secret belonging to another user; callers cannot
/// tell which.
pub async fn logout(
    state: &AppState,
    user_id: DbId,
    refresh_secret: &str,
    now: Timestamp,
) -> AppResult<bool> {
    let token_hash = hash_refresh_secret(refresh_secret, &state.config.auth.refresh_pepper);
    let revoked =
        SessionRepo::revoke_by_hash_for_user(&state.pool, &token_hash, user_id, now).await?;
    if revoked {
        tracing::info!(user_id, "session revoked via logout");
    }
    Ok(revoked)
}

/// Delete sessions past expiry plus the configured grace period.
///
/// Administrative maintenance, not part of any auth decision.
pub async fn cleanup(state: &AppState, now: Timestamp) -> AppResult<u64> {
    let grace = Duration::days(state.config.auth.cleanup_grace_days);
    let deleted = SessionRepo::purge_expired(&state.pool, now, grace).await?;
    tracing::info!(deleted, "purged expired sessions");
    Ok(deleted)
}

/// Revoke all of a user's active sessions and create a replacement, then
/// issue a new access token.
///
/// The revoke+create pair commits as one transaction: a crash in between
/// must not leave zero-or-two active sessions visible, and two concurrent
/// logins must serialize on the row updates rather than both observing "no
/// prior sessions".
async fn rotate_session(
    state: &AppState,
    user: &User,
    ip: Option<String>,
    now: Timestamp,
    used_session: Option<DbId>,
) -> AppResult<TokenPair> {
    let refresh_secret = generate_refresh_secret();
    let token_hash = hash_refresh_secret(&refresh_secret, &state.config.auth.refresh_pepper);
    let expires_at = now + Duration::days(state.config.auth.refresh_token_expiry_days);

    let mut tx = state.pool.begin().await?;

    if let Some(session_id) = used_session {
        SessionRepo::touch_last_used(&mut *tx, session_id, now).await?;
    }

    SessionRepo::revoke_all_active_for_user(&mut *tx, user.id, now).await?;

    let input = CreateSession {
        user_id: user.id,
        token_hash,
        created_at: now,
        expires_at,
        ip,
    };
    SessionRepo::create(&mut *tx, &input)
        .await
        .map_err(classify_session_create_error)?;

    tx.commit().await?;

    let access_token = state
        .signer
        .issue(&user.email, now)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(TokenPair {
        access_token,
        token_type: "bearer",
        refresh_token: refresh_secret,
    })
}

/// A duplicate `token_hash` means two independently generated 256-bit
/// secrets collided, which in practice means a broken RNG or tampering.
/// Treat it as a fatal integrity fault, never as something to overwrite.
fn classify_session_create_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_auth_sessions_token_hash")
        {
            tracing::error!("refresh token digest collision on session create");
            return AppError::Core(CoreError::Internal(
                "refresh token digest collision".into(),
            ));
        }
    }
    AppError::Database(err)
}
