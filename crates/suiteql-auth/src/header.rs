//! `Authorization` header assembly.
//!
//! The header value has the form:
//!
//! ```text
//! OAuth realm="<account>",oauth_consumer_key="<ck>",oauth_token="<tk>",
//!   oauth_signature_method="<method>",oauth_timestamp="<ts>",
//!   oauth_nonce="<nonce>",oauth_version="1.0",oauth_signature="<sig>"
//! ```
//!
//! Field order is fixed because some verifiers compare it literally. Values
//! are inserted verbatim; keeping `"` out of them is up to the caller.

use crate::params::OAUTH_VERSION;

/// Build the `Authorization` header value.
///
/// `signature` is expected to be percent-encoded already, as returned by
/// [`crate::signer::sign`].
///
/// # Examples
///
/// ```
/// use suiteql_auth::header::build_authorization_header;
///
/// let header = build_authorization_header(
///     "1234567", "CK", "TK", "HMAC-SHA256", "1700000000", "abc123", "sig%3D",
/// );
/// assert!(header.starts_with("OAuth realm=\"1234567\",oauth_consumer_key=\"CK\","));
/// assert!(header.ends_with("oauth_version=\"1.0\",oauth_signature=\"sig%3D\""));
/// ```
#[must_use]
pub fn build_authorization_header(
    account_id: &str,
    consumer_key: &str,
    token_key: &str,
    signature_method: &str,
    timestamp: &str,
    nonce: &str,
    signature: &str,
) -> String {
    format!(
        "OAuth realm=\"{account_id}\",\
         oauth_consumer_key=\"{consumer_key}\",\
         oauth_token=\"{token_key}\",\
         oauth_signature_method=\"{signature_method}\",\
         oauth_timestamp=\"{timestamp}\",\
         oauth_nonce=\"{nonce}\",\
         oauth_version=\"{OAUTH_VERSION}\",\
         oauth_signature=\"{signature}\""
    )
}
