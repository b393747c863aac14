//! Shared domain types for the finance tracker backend.
//!
//! Kept free of any web or database dependencies so both the persistence
//! layer and the API server can depend on it.

pub mod error;
pub mod roles;
pub mod transactions;
pub mod types;
