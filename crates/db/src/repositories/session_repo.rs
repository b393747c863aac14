//! Repository for the `auth_sessions` table.
//!
//! Every method takes a `PgExecutor` rather than a pool so callers decide
//! the transaction boundary. Login and refresh must run their revoke+create
//! pair inside a single transaction; passing `&mut *tx` here makes that the
//! caller's one-line decision.
//!
//! All timestamp comparisons bind a caller-supplied `now` instead of using
//! SQL `NOW()`, so tests can drive the clock.

use fintrack_core::types::{DbId, Timestamp};
use sqlx::PgExecutor;

use crate::models::session::{AuthSession, CreateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, token_hash, created_at, expires_at, last_used_at, revoked_at, ip";

/// Persistence operations for auth sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new active session, returning the created row.
    ///
    /// Fails with a unique violation on `uq_auth_sessions_token_hash` if the
    /// digest already exists; callers treat that as an integrity fault, not
    /// something to retry or overwrite.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateSession,
    ) -> Result<AuthSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_sessions (user_id, token_hash, created_at, expires_at, ip)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthSession>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.created_at)
            .bind(input.expires_at)
            .bind(&input.ip)
            .fetch_one(exec)
            .await
    }

    /// Find an active session by its token hash.
    ///
    /// `None` is a normal outcome (expired, revoked, or bogus token) and is
    /// distinct from a storage failure.
    pub async fn find_active_by_hash(
        exec: impl PgExecutor<'_>,
        token_hash: &str,
        now: Timestamp,
    ) -> Result<Option<AuthSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM auth_sessions
             WHERE token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > $2"
        );
        sqlx::query_as::<_, AuthSession>(&query)
            .bind(token_hash)
            .bind(now)
            .fetch_optional(exec)
            .await
    }

    /// Revoke all active sessions for a user. Returns the count revoked.
    ///
    /// Idempotent: already-revoked and expired sessions are untouched.
    pub async fn revoke_all_active_for_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE auth_sessions SET revoked_at = $2
             WHERE user_id = $1 AND revoked_at IS NULL AND expires_at > $2",
        )
        .bind(user_id)
        .bind(at)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// Revoke the active session matching both the token hash and the owning
    /// user. Returns `true` if a session was revoked.
    ///
    /// The double-keyed predicate is what stops one user revoking another
    /// user's session; a miss never says which key failed.
    pub async fn revoke_by_hash_for_user(
        exec: impl PgExecutor<'_>,
        token_hash: &str,
        user_id: DbId,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE auth_sessions SET revoked_at = $3
             WHERE token_hash = $1 AND user_id = $2
               AND revoked_at IS NULL AND expires_at > $3",
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(at)
        .execute(exec)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp `last_used_at` on a session.
    pub async fn touch_last_used(
        exec: impl PgExecutor<'_>,
        id: DbId,
        at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE auth_sessions SET last_used_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(exec)
            .await?;
        Ok(())
    }

    /// Delete sessions whose expiry is more than `grace` in the past,
    /// revoked or not. Returns the count deleted.
    ///
    /// Maintenance only; never part of an auth decision. Safe to run
    /// alongside normal traffic since it only removes rows already past
    /// their useful life.
    pub async fn purge_expired(
        exec: impl PgExecutor<'_>,
        now: Timestamp,
        grace: chrono::Duration,
    ) -> Result<u64, sqlx::Error> {
        let cutoff = now - grace;
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at < $1")
            .bind(cutoff)
            .execute(exec)
            .await?;
        Ok(result.rows_affected())
    }
}
