//! End-to-end signing of one outbound request.
//!
//! [`SigningRequest`] carries everything a signature depends on. Calling
//! [`SigningRequest::sign`] runs the full pipeline:
//!
//! 1. validate credentials and per-request fields;
//! 2. split the URL and normalize the parameters;
//! 3. build the base string;
//! 4. compute the HMAC-SHA256 signature;
//! 5. assemble the `Authorization` header.
//!
//! A signature is a pure function of the request. Retrying with the same
//! timestamp and nonce reproduces the same (and most likely rejected) header,
//! so callers build a fresh [`SigningRequest`] for each attempt.

use std::collections::BTreeMap;

use tracing::debug;

use crate::canonical::build_base_string;
use crate::credentials::OAuthCredentials;
use crate::error::AuthError;
use crate::header::build_authorization_header;
use crate::nonce::{DEFAULT_NONCE_LENGTH, generate_nonce, generate_timestamp};
use crate::params::{OAuthParams, SIGNATURE_METHOD, normalize_parameters, split_url};
use crate::signer::sign;

/// The inputs of one signature.
#[derive(Debug, Clone)]
pub struct SigningRequest<'a> {
    method: http::Method,
    url: String,
    credentials: &'a OAuthCredentials,
    timestamp: String,
    nonce: String,
    extra_params: BTreeMap<String, String>,
}

/// The outcome of signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// The canonical text that was signed. Kept for troubleshooting only.
    pub base_string: String,
    /// The percent-encoded base64 signature.
    pub signature: String,
    /// The full `Authorization` header value.
    pub authorization: String,
}

impl<'a> SigningRequest<'a> {
    /// Create a request stamped with the current time and a fresh nonce.
    pub fn new(
        method: http::Method,
        url: impl Into<String>,
        credentials: &'a OAuthCredentials,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            credentials,
            timestamp: generate_timestamp(),
            nonce: generate_nonce(DEFAULT_NONCE_LENGTH),
            extra_params: BTreeMap::new(),
        }
    }

    /// Replace the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Replace the nonce.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Add a parameter that is signed but not part of the URL.
    #[must_use]
    pub fn with_extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The target URL, query string included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The timestamp that will be signed.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The nonce that will be signed.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Build the signature base string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for missing fields, a malformed URL or a
    /// parameter name supplied twice.
    pub fn base_string(&self) -> Result<String, AuthError> {
        self.validate()?;

        let (endpoint, query) = split_url(&self.url)?;
        let oauth = OAuthParams {
            consumer_key: self.credentials.consumer_key(),
            token: self.credentials.token_key(),
            timestamp: &self.timestamp,
            nonce: &self.nonce,
        };
        let params = normalize_parameters(&oauth, query, &self.extra_params)?;

        Ok(build_base_string(self.method.as_str(), endpoint, &params))
    }

    /// Sign the request and build its `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request is incomplete, the URL is
    /// malformed, parameters collide, or a secret is not ASCII.
    pub fn sign(&self) -> Result<SignedRequest, AuthError> {
        let base_string = self.base_string()?;

        debug!(
            method = %self.method,
            url = %self.url,
            base_string,
            "Built OAuth signature base string"
        );

        let signature = sign(
            &base_string,
            self.credentials.consumer_secret(),
            self.credentials.token_secret(),
        )?;

        let authorization = build_authorization_header(
            self.credentials.account_id(),
            self.credentials.consumer_key(),
            self.credentials.token_key(),
            SIGNATURE_METHOD,
            &self.timestamp,
            &self.nonce,
            &signature,
        );

        debug!(
            account_id = %self.credentials.account_id(),
            timestamp = %self.timestamp,
            nonce = %self.nonce,
            "Signed outbound request"
        );

        Ok(SignedRequest {
            base_string,
            signature,
            authorization,
        })
    }

    fn validate(&self) -> Result<(), AuthError> {
        self.credentials.validate()?;
        if self.timestamp.is_empty() {
            return Err(AuthError::MissingCredential("timestamp"));
        }
        if self.nonce.is_empty() {
            return Err(AuthError::MissingCredential("nonce"));
        }
        Ok(())
    }
}
