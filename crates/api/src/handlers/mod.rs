pub mod auth;
pub mod transactions;
pub mod users;
