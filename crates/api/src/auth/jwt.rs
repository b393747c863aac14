//! Signed access-token issuance and validation.
//!
//! Access tokens are HS256-signed JWTs asserting `{sub, iat, exp}` where
//! `sub` is the user's email. They are never persisted and cannot be revoked
//! before expiry, so they are short-lived by design; revocable long-lived
//! credentials are the refresh tokens in [`super::refresh`].
//!
//! The signer holds one current signing secret plus an ordered list of
//! previous secrets that are still accepted for verification, so rotating
//! the secret does not instantly invalidate every outstanding token.

use fintrack_core::types::Timestamp;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's email.
    pub sub: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Why a token failed validation.
///
/// Both variants surface to the caller as the same opaque 401; the split
/// exists only so the gate can attach the right machine-readable reason tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Valid signature, but `exp` is not in the future.
    Expired,
    /// Anything else: bad signature, malformed token, missing or empty
    /// claims, unexpected algorithm.
    Invalid,
}

/// Issues and validates access tokens. Built once from [`AuthConfig`] at
/// startup and shared via `AppState`; immutable thereafter.
pub struct TokenSigner {
    encoding: EncodingKey,
    /// Verification keys, current secret first.
    decoding: Vec<DecodingKey>,
    access_ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(config: &AuthConfig) -> Self {
        let mut decoding = vec![DecodingKey::from_secret(config.jwt_secret.as_bytes())];
        decoding.extend(
            config
                .previous_jwt_secrets
                .iter()
                .map(|s| DecodingKey::from_secret(s.as_bytes())),
        );

        TokenSigner {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding,
            access_ttl_secs: config.access_token_expiry_mins * 60,
        }
    }

    /// Issue an HS256 access token for `subject`, valid from `now` for the
    /// configured TTL.
    pub fn issue(&self, subject: &str, now: Timestamp) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + self.access_ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding) // HS256
    }

    /// Validate a token against all accepted keys and the injected clock.
    ///
    /// Rejects a bad signature, a non-HS256 algorithm header, missing or
    /// empty `sub`, missing `exp`, and `exp <= now` (strictly greater is
    /// required, with zero leeway).
    pub fn validate(&self, token: &str, now: Timestamp) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock, strictly.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = self
            .decoding
            .iter()
            .find_map(|key| decode::<Claims>(token, key, &validation).ok())
            .map(|data| data.claims)
            .ok_or(TokenError::Invalid)?;

        if claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }
        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
