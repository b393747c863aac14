//! Opaque refresh-secret generation and peppered hashing.
//!
//! Refresh secrets are looked up by their digest (an equality query), so
//! unlike passwords they need a deterministic hash. The digest is
//! HMAC-SHA256 keyed with a server-held pepper: if the database leaks
//! without the pepper, the stored digests are useless for forging tokens.
//! The pepper is its own configured secret, independent of the JWT signing
//! secret.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Bytes of entropy in a refresh secret before encoding.
const SECRET_BYTES: usize = 32;

/// Generate a cryptographically secure refresh secret.
///
/// Returns a URL-safe base64 string of 32 random bytes (43 characters).
pub fn generate_refresh_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compute the peppered digest of a refresh secret for storage and lookup.
///
/// Deterministic: the same secret and pepper always produce the same digest.
pub fn hash_refresh_secret(secret: &str, pepper: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(pepper.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(secret.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Verify a presented secret against a stored digest in constant time.
///
/// Never short-circuits on the first mismatched byte.
pub fn verify_refresh_secret(secret: &str, digest: &str, pepper: &str) -> bool {
    hash_refresh_secret(secret, pepper)
        .as_bytes()
        .ct_eq(digest.as_bytes())
        .into()
}
