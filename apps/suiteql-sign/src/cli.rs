//! Command-line argument definitions.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `header` | Print the `Authorization` header for a request |
//! | `request` | Print a complete signed SuiteQL request as JSON |
//! | `aliases` | Print the column aliases of a query as JSON |
//! | `label` | Attach query aliases to a SuiteQL response body |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Sign NetSuite SuiteQL REST requests without sending them.
#[derive(Debug, Parser)]
#[command(name = "suiteql-sign", author, version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the OAuth 1.0a `Authorization` header for a request.
    Header(HeaderArgs),
    /// Print a complete signed SuiteQL request (method, URL, headers, body) as JSON.
    Request(RequestArgs),
    /// Print the column aliases of a query as a JSON array.
    Aliases(AliasesArgs),
    /// Attach the aliases of a query to a SuiteQL response body.
    Label(LabelArgs),
}

/// Timestamp and nonce overrides for reproducible signatures.
#[derive(Debug, Args)]
pub struct ClockArgs {
    /// Unix timestamp to sign instead of the current time.
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Nonce to sign instead of a random one.
    #[arg(long)]
    pub nonce: Option<String>,
}

/// Arguments of `header`.
#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// HTTP method.
    #[arg(long, default_value = "POST", value_parser = parse_method)]
    pub method: http::Method,

    /// Target URL including any query string (defaults to the SuiteQL endpoint).
    #[arg(long)]
    pub url: Option<String>,

    /// Extra signed parameter as `key=value`; may be repeated.
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Also print the signature base string.
    #[arg(long, short)]
    pub verbose: bool,

    #[command(flatten)]
    pub clock: ClockArgs,
}

/// Arguments of `request`.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// SuiteQL query text.
    pub query: String,

    /// Page size (defaults to `NETSUITE_PAGE_LIMIT`).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Index of the first row.
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    #[command(flatten)]
    pub clock: ClockArgs,
}

/// Arguments of `aliases`.
#[derive(Debug, Args)]
pub struct AliasesArgs {
    /// SuiteQL query text.
    pub query: String,
}

/// Arguments of `label`.
#[derive(Debug, Args)]
pub struct LabelArgs {
    /// SuiteQL query text the response belongs to.
    pub query: String,

    /// File holding the response body (reads stdin when omitted).
    #[arg(long)]
    pub input: Option<PathBuf>,
}

fn parse_method(value: &str) -> Result<http::Method, String> {
    http::Method::from_bytes(value.to_ascii_uppercase().as_bytes())
        .map_err(|e| format!("invalid HTTP method `{value}`: {e}"))
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_owned(), val.to_owned())),
        _ => Err(format!("expected key=value, got `{value}`")),
    }
}
