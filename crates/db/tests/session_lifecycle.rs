//! Integration tests for the auth session repository.
//!
//! Exercises the session state machine against a real database:
//! - Active lookup semantics (revoked / expired / bogus hashes miss)
//! - Revoke-all idempotency and scoping
//! - Double-keyed revocation for logout
//! - Token-hash uniqueness
//! - Expired-session purging with a grace window

use chrono::{Duration, Utc};
use fintrack_core::types::Timestamp;
use fintrack_db::models::session::CreateSession;
use fintrack_db::models::user::CreateUser;
use fintrack_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$fake".to_string(),
        is_active: true,
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_session(user_id: i64, hash: &str, now: Timestamp, ttl_days: i64) -> CreateSession {
    CreateSession {
        user_id,
        token_hash: hash.to_string(),
        created_at: now,
        expires_at: now + Duration::days(ttl_days),
        ip: Some("127.0.0.1".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_find_active(pool: PgPool) {
    let now = Utc::now();
    let user_id = create_user(&pool, "a@test.com").await;

    let created = SessionRepo::create(&pool, &new_session(user_id, "hash-a", now, 7))
        .await
        .expect("create should succeed");
    assert_eq!(created.user_id, user_id);
    assert!(created.revoked_at.is_none());
    assert!(created.last_used_at.is_none());

    let found = SessionRepo::find_active_by_hash(&pool, "hash-a", now)
        .await
        .expect("lookup should succeed")
        .expect("active session should be found");
    assert_eq!(found.id, created.id);

    // A bogus hash is a miss, not an error.
    let missing = SessionRepo::find_active_by_hash(&pool, "no-such-hash", now)
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_expired_session_not_found(pool: PgPool) {
    let now = Utc::now();
    let user_id = create_user(&pool, "b@test.com").await;

    SessionRepo::create(&pool, &new_session(user_id, "hash-b", now, 7))
        .await
        .expect("create should succeed");

    // Advance the injected clock past expiry: the row still exists but no
    // longer matches the active predicate.
    let later = now + Duration::days(8);
    let found = SessionRepo::find_active_by_hash(&pool, "hash-b", later)
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_revoke_all_is_scoped_and_idempotent(pool: PgPool) {
    let now = Utc::now();
    let alice = create_user(&pool, "alice@test.com").await;
    let bob = create_user(&pool, "bob@test.com").await;

    SessionRepo::create(&pool, &new_session(alice, "hash-alice-1", now, 7))
        .await
        .expect("create should succeed");
    SessionRepo::create(&pool, &new_session(alice, "hash-alice-2", now, 7))
        .await
        .expect("create should succeed");
    SessionRepo::create(&pool, &new_session(bob, "hash-bob", now, 7))
        .await
        .expect("create should succeed");

    let revoked = SessionRepo::revoke_all_active_for_user(&pool, alice, now)
        .await
        .expect("revoke should succeed");
    assert_eq!(revoked, 2);

    // Second pass is a no-op.
    let revoked_again = SessionRepo::revoke_all_active_for_user(&pool, alice, now)
        .await
        .expect("revoke should succeed");
    assert_eq!(revoked_again, 0);

    // Bob's session is untouched.
    let bob_session = SessionRepo::find_active_by_hash(&pool, "hash-bob", now)
        .await
        .expect("lookup should succeed");
    assert!(bob_session.is_some());
}

#[sqlx::test]
async fn test_revoke_by_hash_requires_owner(pool: PgPool) {
    let now = Utc::now();
    let alice = create_user(&pool, "alice@test.com").await;
    let bob = create_user(&pool, "bob@test.com").await;

    SessionRepo::create(&pool, &new_session(alice, "hash-owned", now, 7))
        .await
        .expect("create should succeed");

    // Bob cannot revoke Alice's session even with the right hash.
    let revoked = SessionRepo::revoke_by_hash_for_user(&pool, "hash-owned", bob, now)
        .await
        .expect("revoke should succeed");
    assert!(!revoked);

    let revoked = SessionRepo::revoke_by_hash_for_user(&pool, "hash-owned", alice, now)
        .await
        .expect("revoke should succeed");
    assert!(revoked);

    // Already revoked: a second attempt reports false.
    let revoked = SessionRepo::revoke_by_hash_for_user(&pool, "hash-owned", alice, now)
        .await
        .expect("revoke should succeed");
    assert!(!revoked);
}

#[sqlx::test]
async fn test_token_hash_unique_violation(pool: PgPool) {
    let now = Utc::now();
    let user_id = create_user(&pool, "c@test.com").await;

    SessionRepo::create(&pool, &new_session(user_id, "hash-dup", now, 7))
        .await
        .expect("first create should succeed");

    let err = SessionRepo::create(&pool, &new_session(user_id, "hash-dup", now, 7))
        .await
        .expect_err("duplicate token hash must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_auth_sessions_token_hash"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_touch_last_used(pool: PgPool) {
    let now = Utc::now();
    let user_id = create_user(&pool, "d@test.com").await;

    let session = SessionRepo::create(&pool, &new_session(user_id, "hash-d", now, 7))
        .await
        .expect("create should succeed");

    let used_at = now + Duration::minutes(5);
    SessionRepo::touch_last_used(&pool, session.id, used_at)
        .await
        .expect("touch should succeed");

    let found = SessionRepo::find_active_by_hash(&pool, "hash-d", used_at)
        .await
        .expect("lookup should succeed")
        .expect("session should still be active");
    // Postgres keeps microsecond precision; compare at that granularity.
    assert_eq!(
        found.last_used_at.map(|t| t.timestamp_micros()),
        Some(used_at.timestamp_micros())
    );
}

#[sqlx::test]
async fn test_purge_expired_honors_grace(pool: PgPool) {
    let now = Utc::now();
    let user_id = create_user(&pool, "e@test.com").await;

    // Expired 10 days ago: past the grace window, purged.
    let mut stale = new_session(user_id, "hash-stale", now - Duration::days(17), 7);
    stale.expires_at = now - Duration::days(10);
    SessionRepo::create(&pool, &stale)
        .await
        .expect("create should succeed");

    // Expired yesterday: inside the 2-day grace window, kept.
    let mut recent = new_session(user_id, "hash-recent", now - Duration::days(8), 7);
    recent.expires_at = now - Duration::days(1);
    SessionRepo::create(&pool, &recent)
        .await
        .expect("create should succeed");

    // Still live: kept.
    SessionRepo::create(&pool, &new_session(user_id, "hash-live", now, 7))
        .await
        .expect("create should succeed");

    let deleted = SessionRepo::purge_expired(&pool, now, Duration::days(2))
        .await
        .expect("purge should succeed");
    assert_eq!(deleted, 1);

    let live = SessionRepo::find_active_by_hash(&pool, "hash-live", now)
        .await
        .expect("lookup should succeed");
    assert!(live.is_some());
}
