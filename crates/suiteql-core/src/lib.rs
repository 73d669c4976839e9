//! Core types and configuration for the SuiteQL signing tools.
//!
//! This crate holds what the signing library and the command-line tool share:
//! environment-driven configuration, the NetSuite account id type, and the
//! core error type.

mod config;
mod error;
mod types;

pub use config::SuiteQlConfig;
pub use error::{SuiteQlError, SuiteQlResult};
pub use types::AccountId;
