pub mod session;
pub mod transaction;
pub mod user;
