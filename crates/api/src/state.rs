use std::sync::Arc;

use crate::auth::jwt::TokenSigner;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` or is already
/// `Clone`, and nothing is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fintrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Access-token signer, built once from the configured secrets.
    pub signer: Arc<TokenSigner>,
}

impl AppState {
    /// Build state from a pool and configuration, constructing the signer.
    pub fn new(pool: fintrack_db::DbPool, config: ServerConfig) -> Self {
        let signer = Arc::new(TokenSigner::new(&config.auth));
        AppState {
            pool,
            config: Arc::new(config),
            signer,
        }
    }
}
