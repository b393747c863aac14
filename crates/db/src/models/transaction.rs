//! Financial transaction model and DTOs.

use fintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    pub amount: f64,
    /// `"income"` or `"outcome"`.
    pub txn_type: String,
    pub description: String,
    pub transaction_date: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new transaction. `user_id` comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub amount: f64,
    pub txn_type: String,
    pub description: String,
    pub transaction_date: Timestamp,
}
