//! suiteql-sign - Offline signer for NetSuite SuiteQL REST requests.
//!
//! Builds OAuth 1.0a (HMAC-SHA256) `Authorization` headers and complete
//! SuiteQL requests from credentials in the environment. Nothing is sent over
//! the network.
//!
//! # Usage
//!
//! ```text
//! suiteql-sign header --url "$NETSUITE_SUITEQL_URL?limit=1000&offset=0"
//! suiteql-sign request "SELECT id AS \"Customer ID\" FROM customer"
//! suiteql-sign aliases "SELECT id AS ident, name AS \"Full Name\" FROM customer"
//! curl ... | suiteql-sign label "SELECT id AS ident FROM customer"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NETSUITE_ACCOUNT_ID` | *(required)* | Account ID, used as the OAuth realm |
//! | `NETSUITE_CONSUMER_KEY` | *(required)* | Integration consumer key |
//! | `NETSUITE_CONSUMER_SECRET` | *(required)* | Integration consumer secret |
//! | `NETSUITE_TOKEN_ID` | *(required)* | Access token ID |
//! | `NETSUITE_TOKEN_SECRET` | *(required)* | Access token secret |
//! | `NETSUITE_SUITEQL_URL` | *(derived from account)* | SuiteQL endpoint |
//! | `NETSUITE_NONCE_LENGTH` | `32` | Length of generated nonces |
//! | `NETSUITE_PAGE_LIMIT` | `1000` | Default page size |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `LOG_LEVEL`. Logs go to
/// stderr so stdout carries only command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Read the `LOG_LEVEL` environment variable, defaulting to `"warn"`.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&log_level())?;
    commands::run(cli.command)
}
