//! NetSuite type definitions shared across crates.

use std::fmt;

use crate::error::SuiteQlError;

/// Host suffix of the SuiteTalk REST services.
const SUITETALK_HOST_SUFFIX: &str = "suitetalk.api.netsuite.com";

/// Path of the SuiteQL query endpoint.
const SUITEQL_PATH: &str = "/services/rest/query/v1/suiteql";

/// NetSuite account ID, as used for the OAuth realm (e.g. `1234567_SB1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID.
    ///
    /// # Errors
    /// Returns an error if the ID is empty or contains characters other than
    /// ASCII letters, digits, `_` and `-`.
    pub fn new(id: impl Into<String>) -> Result<Self, SuiteQlError> {
        let id = id.into();
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(SuiteQlError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The account's host label: lower-case, with `_` replaced by `-`.
    ///
    /// Sandbox accounts such as `1234567_SB1` are served from `1234567-sb1`.
    #[must_use]
    pub fn host_id(&self) -> String {
        self.0.to_ascii_lowercase().replace('_', "-")
    }

    /// The SuiteQL REST endpoint for this account.
    #[must_use]
    pub fn suiteql_url(&self) -> String {
        format!(
            "https://{}.{SUITETALK_HOST_SUFFIX}{SUITEQL_PATH}",
            self.host_id()
        )
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
