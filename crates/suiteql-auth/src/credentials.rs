//! OAuth 1.0a token-based credentials.
//!
//! A NetSuite integration authenticates with two key pairs: the consumer
//! (integration record) key and secret, and the access token key and secret.
//! The account id is sent as the OAuth `realm`. Credentials are always
//! supplied by the caller; nothing in this crate stores them.

use std::fmt;

use crate::error::AuthError;

/// The credentials needed to sign one request.
///
/// `Debug` output redacts both secrets.
///
/// # Examples
///
/// ```
/// use suiteql_auth::credentials::OAuthCredentials;
///
/// let creds = OAuthCredentials::new("1234567", "CK", "CS", "TK", "TS");
/// assert!(creds.validate().is_ok());
/// assert!(!format!("{creds:?}").contains("CS"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    account_id: String,
    consumer_key: String,
    consumer_secret: String,
    token_key: String,
    token_secret: String,
}

impl OAuthCredentials {
    /// Create credentials from the account id and the two key pairs.
    pub fn new(
        account_id: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token_key: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_key: token_key.into(),
            token_secret: token_secret.into(),
        }
    }

    /// The account id, used as the OAuth realm.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The consumer key.
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The consumer secret.
    #[must_use]
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// The access token key.
    #[must_use]
    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    /// The access token secret.
    #[must_use]
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] naming the first empty field.
    pub fn validate(&self) -> Result<(), AuthError> {
        let fields = [
            ("account id", &self.account_id),
            ("consumer key", &self.consumer_key),
            ("consumer secret", &self.consumer_secret),
            ("token key", &self.token_key),
            ("token secret", &self.token_secret),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AuthError::MissingCredential(name));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("account_id", &self.account_id)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token_key", &self.token_key)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}
