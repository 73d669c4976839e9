//! Parameter normalization for OAuth 1.0a signing.
//!
//! Three sources feed the signed parameter set:
//!
//! 1. the six protocol parameters (`oauth_consumer_key`, `oauth_token`,
//!    `oauth_signature_method`, `oauth_timestamp`, `oauth_nonce`,
//!    `oauth_version`);
//! 2. the decoded query string of the target URL;
//! 3. caller-supplied extra parameters such as `offset`.
//!
//! The union is kept in a [`ParameterSet`], ordered by ordinal key comparison
//! so that sender and verifier walk the parameters in the same order. A name
//! supplied by two sources is rejected rather than silently overwritten.

use std::collections::BTreeMap;

use crate::error::AuthError;

/// The only signature method this crate produces.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";

/// The OAuth protocol version sent with every request.
pub const OAUTH_VERSION: &str = "1.0";

/// An ordered set of signed parameters with unique names.
///
/// # Examples
///
/// ```
/// use suiteql_auth::params::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("b", "2").unwrap();
/// params.insert("a", "1").unwrap();
/// params.insert("Offset", "3").unwrap();
/// let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["Offset", "a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::DuplicateParameter`] if `key` is already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), AuthError> {
        let key = key.into();
        if self.0.contains_key(&key) {
            return Err(AuthError::DuplicateParameter(key));
        }
        self.0.insert(key, value.into());
        Ok(())
    }

    /// Look up a parameter value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in signing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The per-request OAuth protocol values.
#[derive(Debug, Clone, Copy)]
pub struct OAuthParams<'a> {
    /// Consumer key.
    pub consumer_key: &'a str,
    /// Access token key.
    pub token: &'a str,
    /// Unix timestamp in seconds.
    pub timestamp: &'a str,
    /// Per-request nonce.
    pub nonce: &'a str,
}

impl<'a> OAuthParams<'a> {
    /// The six protocol parameters as `(name, value)` pairs.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &'a str); 6] {
        [
            ("oauth_consumer_key", self.consumer_key),
            ("oauth_token", self.token),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", self.timestamp),
            ("oauth_nonce", self.nonce),
            ("oauth_version", OAUTH_VERSION),
        ]
    }
}

/// Split a URL into its base endpoint and its raw query string.
///
/// The endpoint is scheme, authority and path; the fragment is dropped. A
/// URL without a query yields an empty query string.
///
/// # Errors
///
/// Returns [`AuthError::MalformedUrl`] unless the URL is absolute with a
/// scheme and a host.
///
/// # Examples
///
/// ```
/// use suiteql_auth::params::split_url;
///
/// let (endpoint, query) = split_url("https://example.com/path?b=2&a=1").unwrap();
/// assert_eq!(endpoint, "https://example.com/path");
/// assert_eq!(query, "b=2&a=1");
/// ```
pub fn split_url(url: &str) -> Result<(&str, &str), AuthError> {
    let uri: http::Uri = url
        .parse()
        .map_err(|_| AuthError::MalformedUrl(url.to_owned()))?;

    if uri.scheme().is_none() || uri.host().is_none_or(str::is_empty) {
        return Err(AuthError::MalformedUrl(url.to_owned()));
    }

    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    Ok(without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, "")))
}

/// Decode a form-encoded query string into `(name, value)` pairs.
///
/// `+` decodes to a space and `%XX` sequences are decoded. Pairs with an empty
/// or missing value are dropped, and a repeated name keeps its first value.
///
/// # Examples
///
/// ```
/// use suiteql_auth::params::decode_query;
///
/// let pairs = decode_query("offset=0&limit=&offset=9&name=a+b");
/// assert_eq!(
///     pairs,
///     vec![
///         ("offset".to_owned(), "0".to_owned()),
///         ("name".to_owned(), "a b".to_owned()),
///     ]
/// );
/// ```
#[must_use]
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() || pairs.iter().any(|(existing, _)| *existing == key) {
            continue;
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }

    pairs
}

/// Merge the protocol, query and extra parameters into one ordered set.
///
/// # Errors
///
/// Returns [`AuthError::DuplicateParameter`] when a name appears in more than
/// one source.
pub fn normalize_parameters(
    oauth: &OAuthParams<'_>,
    query: &str,
    extra: &BTreeMap<String, String>,
) -> Result<ParameterSet, AuthError> {
    let mut params = ParameterSet::new();

    for (key, value) in oauth.pairs() {
        params.insert(key, value)?;
    }
    for (key, value) in decode_query(query) {
        params.insert(key, value)?;
    }
    for (key, value) in extra {
        params.insert(key.as_str(), value.as_str())?;
    }

    Ok(params)
}
