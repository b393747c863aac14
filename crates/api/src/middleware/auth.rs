//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_db::repositories::UserRepo;

use crate::auth::jwt::TokenError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The extractor does NOT check `is_active`; endpoints that need standing
/// use the wrappers in [`crate::middleware::rbac`]. Every rejection is a
/// generic 401 whose message is one of the machine-readable tags
/// `missing_or_invalid_token`, `expired_token`, or `unknown_subject`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub id: DbId,
    /// The user's email (from `claims.sub`).
    pub email: String,
    /// The user's role name (e.g. `"admin"`, `"user"`).
    pub role: String,
    /// Account standing; checked by [`crate::middleware::rbac`], not here.
    pub is_active: bool,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| unauthenticated("missing_or_invalid_token"))?;

        let claims = state
            .signer
            .validate(token, chrono::Utc::now())
            .map_err(|err| match err {
                TokenError::Expired => unauthenticated("expired_token"),
                TokenError::Invalid => unauthenticated("missing_or_invalid_token"),
            })?;

        // A token can outlive its user; an unresolvable subject means the
        // credentials are no longer valid.
        let user = UserRepo::find_by_email(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| unauthenticated("unknown_subject"))?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
        })
    }
}

fn unauthenticated(reason: &str) -> AppError {
    tracing::debug!(reason, "request unauthenticated");
    AppError::Core(CoreError::Unauthorized(reason.into()))
}
