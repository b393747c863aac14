//! Auth session model and DTOs.
//!
//! A row tracks one issued refresh token: its peppered hash, lifetime, and
//! revocation state. Rows are never mutated after creation except to set
//! `revoked_at` or `last_used_at`.

use fintrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `auth_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub id: DbId,
    pub user_id: DbId,
    /// Peppered HMAC-SHA256 digest of the refresh secret. Unique across all
    /// sessions, active or not.
    pub token_hash: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    /// `None` means the session has not been revoked.
    pub revoked_at: Option<Timestamp>,
    /// Origin IP at creation, informational only.
    pub ip: Option<String>,
}

/// DTO for creating a new auth session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub ip: Option<String>,
}
