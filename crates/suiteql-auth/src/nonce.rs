//! Per-request nonce and timestamp generation.
//!
//! Nonces come from the thread-local `rand` generator. They only need to be
//! unique per timestamp and consumer key. No record of issued nonces is kept.

use chrono::Utc;
use rand::Rng;

/// Nonce length used when the caller does not pick one.
pub const DEFAULT_NONCE_LENGTH: usize = 32;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";

/// The current Unix time in whole seconds, as decimal digits.
///
/// # Examples
///
/// ```
/// use suiteql_auth::nonce::generate_timestamp;
///
/// let ts = generate_timestamp();
/// assert!(ts.chars().all(|c| c.is_ascii_digit()));
/// ```
#[must_use]
pub fn generate_timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Generate a nonce of `length` letters and digits.
///
/// # Examples
///
/// ```
/// use suiteql_auth::nonce::generate_nonce;
///
/// let nonce = generate_nonce(11);
/// assert_eq!(nonce.len(), 11);
/// assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[must_use]
pub fn generate_nonce(length: usize) -> String {
    random_string(ALPHANUMERIC, length)
}

/// Generate a nonce of `length` decimal digits.
#[must_use]
pub fn generate_numeric_nonce(length: usize) -> String {
    random_string(DIGITS, length)
}

fn random_string(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}
