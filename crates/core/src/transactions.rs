//! Validation rules for financial transactions.
//!
//! A transaction must reference an authenticated user; everything else the
//! business layer cares about is checked here, before any row is written.

use crate::error::CoreError;

/// Direction of a transaction. Stored as lowercase text in `txn_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Income,
    Outcome,
}

impl TxnKind {
    /// Parse the wire representation. Only `"income"` and `"outcome"` are
    /// accepted; case matters.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(TxnKind::Income),
            "outcome" => Some(TxnKind::Outcome),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TxnKind::Income => "income",
            TxnKind::Outcome => "outcome",
        }
    }
}

/// Validate a new transaction's fields.
///
/// Rejects an unknown `txn_type`, an empty description, and a non-positive
/// or non-finite amount.
pub fn validate_new_transaction(
    txn_type: &str,
    description: &str,
    amount: f64,
) -> Result<TxnKind, CoreError> {
    let kind = TxnKind::parse(txn_type).ok_or_else(|| {
        CoreError::Validation(format!(
            "txn_type must be 'income' or 'outcome', got '{txn_type}'"
        ))
    })?;

    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".into(),
        ));
    }

    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be a positive finite number".into(),
        ));
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_valid_income_and_outcome() {
        assert_eq!(
            validate_new_transaction("income", "salary", 2500.0).unwrap(),
            TxnKind::Income
        );
        assert_eq!(
            validate_new_transaction("outcome", "groceries", 42.5).unwrap(),
            TxnKind::Outcome
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = validate_new_transaction("transfer", "x", 1.0).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        // Case-sensitive on purpose: the wire format is lowercase.
        assert!(validate_new_transaction("Income", "x", 1.0).is_err());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(validate_new_transaction("income", "", 1.0).is_err());
        assert!(validate_new_transaction("income", "   ", 1.0).is_err());
    }

    #[test]
    fn test_bad_amounts_rejected() {
        assert!(validate_new_transaction("income", "x", 0.0).is_err());
        assert!(validate_new_transaction("income", "x", -5.0).is_err());
        assert!(validate_new_transaction("income", "x", f64::INFINITY).is_err());
        assert!(validate_new_transaction("income", "x", f64::NAN).is_err());
    }
}
