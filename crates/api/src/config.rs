//! Process configuration.
//!
//! Loaded once in `main` from environment variables, then passed by
//! reference through [`crate::state::AppState`]. No component reads the
//! environment after startup.

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Token and session configuration.
    pub auth: AuthConfig,
}

/// Secrets and lifetimes for the auth subsystem.
///
/// The JWT signing secret and the refresh-token pepper are deliberately two
/// independent values: they protect different data and rotate on different
/// schedules.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign new access tokens.
    pub jwt_secret: String,
    /// Older signing secrets still accepted for verification, newest first.
    /// Lets a secret rotation happen without instantly invalidating every
    /// outstanding access token.
    pub previous_jwt_secrets: Vec<String>,
    /// Server-held secret mixed into refresh-token digests before storage.
    pub refresh_pepper: String,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
    /// How long expired sessions linger before cleanup deletes them
    /// (default: 2 days).
    pub cleanup_grace_days: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let auth = AuthConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth,
        }
    }
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;
/// Default cleanup grace period in days.
const DEFAULT_CLEANUP_GRACE_DAYS: i64 = 2;

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var                      | Required | Default |
    /// |------------------------------|----------|---------|
    /// | `JWT_SECRET`                 | **yes**  | --      |
    /// | `JWT_PREVIOUS_SECRETS`       | no       | empty   |
    /// | `REFRESH_TOKEN_PEPPER`       | **yes**  | --      |
    /// | `ACCESS_TOKEN_EXPIRY_MINS`   | no       | `30`    |
    /// | `REFRESH_TOKEN_EXPIRY_DAYS`  | no       | `7`     |
    /// | `SESSION_CLEANUP_GRACE_DAYS` | no       | `2`     |
    ///
    /// # Panics
    ///
    /// Panics if either secret is unset or empty, or if the two secrets are
    /// identical. Misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        let previous_jwt_secrets: Vec<String> = std::env::var("JWT_PREVIOUS_SECRETS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let refresh_pepper = std::env::var("REFRESH_TOKEN_PEPPER")
            .expect("REFRESH_TOKEN_PEPPER must be set in the environment");
        assert!(
            !refresh_pepper.is_empty(),
            "REFRESH_TOKEN_PEPPER must not be empty"
        );
        assert!(
            refresh_pepper != jwt_secret,
            "REFRESH_TOKEN_PEPPER must differ from JWT_SECRET"
        );

        let access_token_expiry_mins: i64 = std::env::var("ACCESS_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("ACCESS_TOKEN_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("REFRESH_TOKEN_EXPIRY_DAYS must be a valid i64");

        let cleanup_grace_days: i64 = std::env::var("SESSION_CLEANUP_GRACE_DAYS")
            .unwrap_or_else(|_| DEFAULT_CLEANUP_GRACE_DAYS.to_string())
            .parse()
            .expect("SESSION_CLEANUP_GRACE_DAYS must be a valid i64");

        Self {
            jwt_secret,
            previous_jwt_secrets,
            refresh_pepper,
            access_token_expiry_mins,
            refresh_token_expiry_days,
            cleanup_grace_days,
        }
    }
}
