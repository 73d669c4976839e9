//! Assembly of the outbound SuiteQL request.
//!
//! A SuiteQL call is a `POST` to the query endpoint with paging in the query
//! string and the query text in a JSON body:
//!
//! ```text
//! POST /services/rest/query/v1/suiteql?limit=1000&offset=0
//! prefer: transient
//! content-type: application/json
//! cache-control: no-cache
//! authorization: OAuth realm="...",...
//!
//! {"q":"SELECT ..."}
//! ```
//!
//! `limit` and `offset` are part of the URL and therefore part of the
//! signature. The request is returned as a value; sending it is left to the
//! caller's HTTP client.

use http::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderName};
use serde::Serialize;
use suiteql_auth::nonce::DEFAULT_NONCE_LENGTH;
use suiteql_auth::{OAuthCredentials, SigningRequest, generate_nonce, generate_timestamp};
use tracing::debug;

use crate::error::QueryError;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 1000;

/// JSON body of a SuiteQL call.
#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    q: &'a str,
}

/// One page of a SuiteQL query.
///
/// # Examples
///
/// ```
/// use suiteql_auth::OAuthCredentials;
/// use suiteql_query::request::SuiteQlRequest;
///
/// let credentials = OAuthCredentials::new("1234567", "CK", "CS", "TK", "TS");
/// let request = SuiteQlRequest::new("SELECT id FROM customer")
///     .with_offset(1000)
///     .build(&credentials, "https://x.example.com/query/v1/suiteql")
///     .unwrap();
///
/// assert_eq!(request.method(), http::Method::POST);
/// assert_eq!(
///     request.uri(),
///     "https://x.example.com/query/v1/suiteql?limit=1000&offset=1000"
/// );
/// assert_eq!(request.body(), r#"{"q":"SELECT id FROM customer"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteQlRequest {
    query: String,
    limit: u32,
    offset: u64,
}

impl SuiteQlRequest {
    /// Create a request for the first page of `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the index of the first row to return.
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// The query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The request for the page following this one.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + u64::from(self.limit),
            ..self.clone()
        }
    }

    /// The full request URL for `endpoint`, paging parameters included.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{endpoint}{separator}limit={}&offset={}",
            self.limit, self.offset
        )
    }

    /// Build and sign the request with a fresh timestamp and nonce.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if signing fails or the request cannot be built.
    pub fn build(
        &self,
        credentials: &OAuthCredentials,
        endpoint: &str,
    ) -> Result<http::Request<String>, QueryError> {
        self.build_with(
            credentials,
            endpoint,
            &generate_timestamp(),
            &generate_nonce(DEFAULT_NONCE_LENGTH),
        )
    }

    /// Build and sign the request with the given timestamp and nonce.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if signing fails or the request cannot be built.
    pub fn build_with(
        &self,
        credentials: &OAuthCredentials,
        endpoint: &str,
        timestamp: &str,
        nonce: &str,
    ) -> Result<http::Request<String>, QueryError> {
        let url = self.url(endpoint);
        let signed = SigningRequest::new(http::Method::POST, url.as_str(), credentials)
            .with_timestamp(timestamp)
            .with_nonce(nonce)
            .sign()?;

        let body = serde_json::to_string(&QueryBody { q: &self.query })?;

        debug!(
            url = %url,
            limit = self.limit,
            offset = self.offset,
            "Assembled SuiteQL request"
        );

        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(url)
            .header(HeaderName::from_static("prefer"), "transient")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, signed.authorization)
            .header(CACHE_CONTROL, "no-cache")
            .body(body)?;

        Ok(request)
    }
}
