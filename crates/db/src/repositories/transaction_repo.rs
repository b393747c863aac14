//! Repository for the `transactions` table.

use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, amount, txn_type, description, transaction_date, created_at";

/// Provides CRUD operations for transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (user_id, amount, txn_type, description, transaction_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(input.amount)
            .bind(&input.txn_type)
            .bind(&input.description)
            .bind(input.transaction_date)
            .fetch_one(pool)
            .await
    }

    /// List a user's transactions, most recent transaction date first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE user_id = $1
             ORDER BY transaction_date DESC, id DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
