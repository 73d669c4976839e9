//! OAuth 1.0a HMAC-SHA256 request signing for the NetSuite SuiteQL REST API.
//!
//! This crate implements the signing side of token-based authentication:
//! given an outbound request and the caller's credentials, it produces the
//! signature and the `Authorization` header value. It never performs the
//! HTTP call itself.
//!
//! # Overview
//!
//! NetSuite expects every REST call to carry an OAuth 1.0a header signed with
//! HMAC-SHA256 over a canonical base string. The base string is built from the
//! HTTP method, the endpoint, and the sorted union of the OAuth protocol
//! parameters and the URL query parameters.
//!
//! # Usage
//!
//! ```rust
//! use suiteql_auth::{OAuthCredentials, SigningRequest};
//!
//! let credentials = OAuthCredentials::new("1234567", "CK", "CS", "TK", "TS");
//! let signed = SigningRequest::new(
//!     http::Method::POST,
//!     "https://x.example.com/query/v1/suiteql",
//!     &credentials,
//! )
//! .with_timestamp("1700000000")
//! .with_nonce("abc123")
//! .sign()
//! .unwrap();
//!
//! assert_eq!(signed.signature, "CNmln8cHRJtVBcgqidU%2FMkoR7vpebxFPWGJsv7VLVzE%3D");
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Signature base-string construction
//! - [`credentials`] - Consumer and token credentials
//! - [`error`] - Signing error types
//! - [`header`] - `Authorization` header assembly
//! - [`nonce`] - Nonce and timestamp generation
//! - [`params`] - URL splitting and parameter normalization
//! - [`request`] - The end-to-end signing pipeline
//! - [`signer`] - HMAC-SHA256 signing

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod header;
pub mod nonce;
pub mod params;
pub mod request;
pub mod signer;

pub use canonical::build_base_string;
pub use credentials::OAuthCredentials;
pub use error::{AuthError, AuthErrorKind};
pub use header::build_authorization_header;
pub use nonce::{generate_nonce, generate_numeric_nonce, generate_timestamp};
pub use params::{ParameterSet, SIGNATURE_METHOD};
pub use request::{SignedRequest, SigningRequest};
pub use signer::sign;
