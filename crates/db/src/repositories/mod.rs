mod session_repo;
mod transaction_repo;
mod user_repo;

pub use session_repo::SessionRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
