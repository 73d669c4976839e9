//! Error types for the SuiteQL core.

/// Core error type for configuration and shared types.
#[derive(Debug, thiserror::Error)]
pub enum SuiteQlError {
    /// Invalid NetSuite account ID format.
    #[error("invalid NetSuite account ID: {0} (expected letters, digits, '_' or '-')")]
    InvalidAccountId(String),

    /// A required environment variable is not set or is empty.
    #[error("missing required environment variable: {0}")]
    MissingVariable(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for SuiteQL core operations.
pub type SuiteQlResult<T> = Result<T, SuiteQlError>;
