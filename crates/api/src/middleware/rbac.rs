//! Standing and role extractors layered on [`AuthUser`].
//!
//! Authentication (who is this?) and standing (may they act?) are separate
//! decisions: the base extractor answers the first, these wrappers answer
//! the second uniformly for every endpoint that needs it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fintrack_core::error::CoreError;
use fintrack_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated user whose account is active.
///
/// The caller is already identified at this point, so revealing standing
/// with a 403 is deliberate and does not leak account existence.
///
/// ```ignore
/// async fn handler(RequireActive(user): RequireActive) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireActive(pub AuthUser);

impl FromRequestParts<AppState> for RequireActive {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is deactivated".into(),
            )));
        }
        Ok(RequireActive(user))
    }
}

/// Requires an active account with the `admin` role. Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an active admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireActive(user) = RequireActive::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
