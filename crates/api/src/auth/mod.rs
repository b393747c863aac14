//! Authentication building blocks and the session lifecycle.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed access-token issuance and validation.
//! - [`refresh`] -- opaque refresh-secret generation and peppered hashing.
//! - [`service`] -- login, refresh rotation, logout, and session cleanup.

pub mod jwt;
pub mod password;
pub mod refresh;
pub mod service;
