//! HMAC-SHA256 signing of the base string.
//!
//! ```text
//! key       = consumer_secret + "&" + token_secret
//! signature = percent_encode(base64(HMAC-SHA256(key, base_string)))
//! ```
//!
//! Secrets are used as raw ASCII bytes; they are not percent-encoded before
//! being joined.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;

use crate::canonical::oauth_encode;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Build the signing key from the two secrets.
///
/// # Errors
///
/// Returns [`AuthError::NonAsciiSecret`] if either secret is not ASCII.
///
/// # Examples
///
/// ```
/// use suiteql_auth::signer::signing_key;
///
/// assert_eq!(signing_key("CS", "TS").unwrap(), "CS&TS");
/// assert!(signing_key("caf\u{e9}", "TS").is_err());
/// ```
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> Result<String, AuthError> {
    if !consumer_secret.is_ascii() {
        return Err(AuthError::NonAsciiSecret("consumer secret"));
    }
    if !token_secret.is_ascii() {
        return Err(AuthError::NonAsciiSecret("token secret"));
    }
    Ok(format!("{consumer_secret}&{token_secret}"))
}

/// Sign a base string and return the percent-encoded base64 signature.
///
/// # Errors
///
/// Returns [`AuthError::NonAsciiSecret`] if either secret is not ASCII.
///
/// # Examples
///
/// ```
/// use suiteql_auth::signer::sign;
///
/// let signature = sign("data", "key", "secret").unwrap();
/// assert_eq!(signature, "X9GZl7AHP17yDP5vYQst8cGNT1YRHEtlQIf71blyg3U%3D");
/// ```
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, AuthError> {
    let key = signing_key(consumer_secret, token_secret)?;
    let digest = hmac_sha256(key.as_bytes(), base_string.as_bytes());
    Ok(oauth_encode(&BASE64.encode(digest)))
}

/// Compute HMAC-SHA256 and return the raw bytes.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
