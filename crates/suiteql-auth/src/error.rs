//! Error types for OAuth 1.0a request signing.
//!
//! All signing failures are represented by [`AuthError`]. Each variant belongs
//! to one [`AuthErrorKind`]: configuration problems the caller must fix before
//! trying again, or inputs that cannot be encoded the way the signer needs.

/// Broad classification of an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Missing or empty credential, malformed URL, or colliding parameters.
    Configuration,
    /// Input is not representable in the byte form the signer requires.
    Encoding,
}

/// Errors that can occur while signing an outbound request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required credential or request field is missing or empty.
    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),

    /// The target URL is not an absolute URL with a scheme and host.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// The same parameter name was supplied by more than one source.
    #[error("Parameter supplied more than once: {0}")]
    DuplicateParameter(String),

    /// A secret contains characters outside the ASCII range.
    #[error("{0} must be ASCII")]
    NonAsciiSecret(&'static str),
}

impl AuthError {
    /// The category this error falls into.
    #[must_use]
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::MissingCredential(_) | Self::MalformedUrl(_) | Self::DuplicateParameter(_) => {
                AuthErrorKind::Configuration
            }
            Self::NonAsciiSecret(_) => AuthErrorKind::Encoding,
        }
    }

    /// Whether repeating the same call could succeed.
    ///
    /// Always `false`: a signature is fully determined by its inputs, so the
    /// caller has to change the configuration or the input first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
