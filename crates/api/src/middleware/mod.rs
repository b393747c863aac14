//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- resolves a JWT Bearer token to a user row.
//! - [`rbac::RequireActive`] -- additionally requires an active account.
//! - [`rbac::RequireAdmin`] -- requires an active account with the `admin`
//!   role.

pub mod auth;
pub mod rbac;
