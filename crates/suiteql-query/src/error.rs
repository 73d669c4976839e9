//! Error types for SuiteQL request assembly.

use suiteql_auth::AuthError;

/// Errors that can occur while assembling a SuiteQL request.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Signing the request failed.
    #[error("failed to sign request: {0}")]
    Auth(#[from] AuthError),

    /// The JSON body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),

    /// The HTTP request could not be built (e.g. an invalid header value).
    #[error("failed to build HTTP request: {0}")]
    Request(#[from] http::Error),
}
