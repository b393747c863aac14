use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Generic unauthenticated rejection. The message carries a
    /// machine-readable reason tag, never account-existence detail.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is identified but lacks standing (inactive account,
    /// insufficient role).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
