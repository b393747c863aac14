//! Handlers for the `/transactions` resource.
//!
//! Ownership comes from the authenticated caller; the request body never
//! names a user id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fintrack_core::transactions::validate_new_transaction;
use fintrack_db::models::transaction::{CreateTransaction, Transaction};
use fintrack_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireActive;
use crate::state::AppState;

/// POST /api/v1/transactions
///
/// Record a transaction for the authenticated caller. The kind and amount
/// are validated before anything touches the database.
pub async fn create(
    State(state): State<AppState>,
    RequireActive(user): RequireActive,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    validate_new_transaction(&input.txn_type, &input.description, input.amount)?;

    let txn = TransactionRepo::create(&state.pool, user.id, &input).await?;
    tracing::debug!(user_id = user.id, txn_id = txn.id, "transaction recorded");
    Ok((StatusCode::CREATED, Json(txn)))
}

/// GET /api/v1/transactions
///
/// List the caller's transactions, most recent first.
pub async fn list(
    State(state): State<AppState>,
    RequireActive(user): RequireActive,
) -> AppResult<Json<Vec<Transaction>>> {
    let txns = TransactionRepo::list_for_user(&state.pool, user.id).await?;
    Ok(Json(txns))
}
