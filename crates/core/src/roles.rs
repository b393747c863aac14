//! Role names stored in the `users.role` column.

/// Full access, including session maintenance and user listing.
pub const ROLE_ADMIN: &str = "admin";

/// Default role for self-registered users.
pub const ROLE_USER: &str = "user";
