//! Signature base-string construction.
//!
//! The base string is the canonical text that gets signed:
//!
//! ```text
//! METHOD&<encoded endpoint>&<encoded k1=v1><encoded &k2=v2>...
//! ```
//!
//! The parameter part follows the signer NetSuite accepts today rather than
//! the textbook OAuth 1.0a layout: each `k=v` pair is encoded as a unit, and
//! every pair after the first carries its leading `&` into the same encoding
//! pass. The joiner therefore appears as `%26`, while key and value characters
//! are encoded exactly once.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::params::ParameterSet;

/// Characters left as-is by [`oauth_encode`].
///
/// Only RFC 3986 unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`)
/// pass through. Everything else, `/` included, is percent-encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a string with the RFC 3986 unreserved set.
///
/// # Examples
///
/// ```
/// use suiteql_auth::canonical::oauth_encode;
///
/// assert_eq!(oauth_encode("https://a.b/c"), "https%3A%2F%2Fa.b%2Fc");
/// assert_eq!(oauth_encode("a-b_c.d~e"), "a-b_c.d~e");
/// ```
#[must_use]
pub fn oauth_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Build the encoded parameter part of the base string.
///
/// # Examples
///
/// ```
/// use suiteql_auth::canonical::build_parameter_string;
/// use suiteql_auth::params::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("b", "2").unwrap();
/// params.insert("a", "x y").unwrap();
/// assert_eq!(build_parameter_string(&params), "a%3Dx%20y%26b%3D2");
/// ```
#[must_use]
pub fn build_parameter_string(params: &ParameterSet) -> String {
    let mut result = String::new();
    for (index, (key, value)) in params.iter().enumerate() {
        let pair = if index == 0 {
            format!("{key}={value}")
        } else {
            format!("&{key}={value}")
        };
        result.push_str(&oauth_encode(&pair));
    }
    result
}

/// Build the signature base string.
///
/// The method is upper-cased and the endpoint (which must not carry a query
/// string) is percent-encoded.
///
/// # Examples
///
/// ```
/// use suiteql_auth::canonical::build_base_string;
/// use suiteql_auth::params::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("offset", "0").unwrap();
/// let base = build_base_string("post", "https://x.example.com/q", &params);
/// assert_eq!(base, "POST&https%3A%2F%2Fx.example.com%2Fq&offset%3D0");
/// ```
#[must_use]
pub fn build_base_string(method: &str, endpoint: &str, params: &ParameterSet) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        oauth_encode(endpoint),
        build_parameter_string(params)
    )
}
