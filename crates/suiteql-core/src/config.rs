//! Configuration management for the SuiteQL signing tools.
//!
//! All configuration is driven by environment variables. Credentials are read
//! once at startup and handed to the signer explicitly; nothing is kept in
//! process-wide state.

use std::fmt;

use tracing::debug;

use crate::error::{SuiteQlError, SuiteQlResult};
use crate::types::AccountId;

/// Global configuration for the SuiteQL tools.
///
/// `Debug` output redacts both secrets.
#[derive(Clone)]
pub struct SuiteQlConfig {
    /// NetSuite account ID (OAuth realm).
    pub account_id: AccountId,
    /// Integration consumer key.
    pub consumer_key: String,
    /// Integration consumer secret.
    pub consumer_secret: String,
    /// Access token ID.
    pub token_id: String,
    /// Access token secret.
    pub token_secret: String,
    /// SuiteQL endpoint, without a query string.
    pub suiteql_url: String,
    /// Length of generated nonces.
    pub nonce_length: usize,
    /// Default page size sent as `limit`.
    pub page_limit: u32,
}

impl SuiteQlConfig {
    /// Default nonce length.
    pub const DEFAULT_NONCE_LENGTH: usize = 32;
    /// Default SuiteQL page size.
    pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if a credential variable is missing, the account ID is
    /// invalid, or a numeric setting does not parse.
    pub fn from_env() -> SuiteQlResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Same as [`SuiteQlConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SuiteQlResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SuiteQlError::MissingVariable(key.to_owned()))
        };

        let account_id = AccountId::new(required("NETSUITE_ACCOUNT_ID")?)?;
        let suiteql_url = lookup("NETSUITE_SUITEQL_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| account_id.suiteql_url());

        let config = Self {
            consumer_key: required("NETSUITE_CONSUMER_KEY")?,
            consumer_secret: required("NETSUITE_CONSUMER_SECRET")?,
            token_id: required("NETSUITE_TOKEN_ID")?,
            token_secret: required("NETSUITE_TOKEN_SECRET")?,
            suiteql_url,
            nonce_length: parse_or(
                lookup("NETSUITE_NONCE_LENGTH"),
                "NETSUITE_NONCE_LENGTH",
                Self::DEFAULT_NONCE_LENGTH,
            )?,
            page_limit: parse_or(
                lookup("NETSUITE_PAGE_LIMIT"),
                "NETSUITE_PAGE_LIMIT",
                Self::DEFAULT_PAGE_LIMIT,
            )?,
            account_id,
        };

        if config.nonce_length == 0 {
            return Err(SuiteQlError::Config(
                "NETSUITE_NONCE_LENGTH must be greater than zero".to_owned(),
            ));
        }

        debug!(
            account_id = %config.account_id,
            suiteql_url = %config.suiteql_url,
            "Loaded SuiteQL configuration"
        );

        Ok(config)
    }
}

impl fmt::Debug for SuiteQlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteQlConfig")
            .field("account_id", &self.account_id)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("suiteql_url", &self.suiteql_url)
            .field("nonce_length", &self.nonce_length)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> SuiteQlResult<T> {
    match value {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| SuiteQlError::Config(format!("{key} is not a valid number: {v}"))),
    }
}
