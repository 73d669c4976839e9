//! SuiteQL request assembly and result column labeling.
//!
//! This crate sits between a caller's HTTP client and the NetSuite SuiteQL
//! REST endpoint. It builds signed request values with [`suiteql_auth`] and
//! labels the JSON responses with the column aliases written in the query.
//!
//! # Modules
//!
//! - [`alias`] - `AS` alias extraction from query text
//! - [`columns`] - Merging aliases into responses as a `columns` field
//! - [`error`] - Request assembly error types
//! - [`request`] - Signed SuiteQL request construction

pub mod alias;
pub mod columns;
pub mod error;
pub mod request;

pub use alias::extract_aliases;
pub use columns::{attach_columns, label_response};
pub use error::QueryError;
pub use request::SuiteQlRequest;
