//! Subcommand implementations.
//!
//! Every command writes its result to stdout; logs go to stderr.

use std::io::Read;

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use suiteql_auth::{OAuthCredentials, SigningRequest, generate_nonce, generate_timestamp};
use suiteql_core::SuiteQlConfig;
use suiteql_query::{SuiteQlRequest, extract_aliases, label_response};
use tracing::info;

use crate::cli::{AliasesArgs, ClockArgs, Command, HeaderArgs, LabelArgs, RequestArgs};

/// Run a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Header(args) => header(args),
        Command::Request(args) => request(args),
        Command::Aliases(args) => aliases(&args),
        Command::Label(args) => label(&args),
    }
}

fn header(args: HeaderArgs) -> Result<()> {
    let config = SuiteQlConfig::from_env().context("failed to load configuration")?;
    let credentials = credentials(&config);
    let (timestamp, nonce) = clock(args.clock, &config);
    let url = args.url.unwrap_or_else(|| config.suiteql_url.clone());

    let signing = args.params.into_iter().fold(
        SigningRequest::new(args.method, url, &credentials)
            .with_timestamp(timestamp)
            .with_nonce(nonce),
        |request, (key, value)| request.with_extra_param(key, value),
    );
    let signed = signing.sign().context("failed to sign request")?;

    if args.verbose {
        println!("{}", signed.base_string);
    }
    println!("{}", signed.authorization);
    Ok(())
}

fn request(args: RequestArgs) -> Result<()> {
    let config = SuiteQlConfig::from_env().context("failed to load configuration")?;
    let credentials = credentials(&config);
    let (timestamp, nonce) = clock(args.clock, &config);

    let request = SuiteQlRequest::new(args.query)
        .with_limit(args.limit.unwrap_or(config.page_limit))
        .with_offset(args.offset)
        .build_with(&credentials, &config.suiteql_url, &timestamp, &nonce)
        .context("failed to build SuiteQL request")?;

    info!(uri = %request.uri(), "built SuiteQL request");

    println!("{}", serde_json::to_string_pretty(&describe(&request))?);
    Ok(())
}

fn aliases(args: &AliasesArgs) -> Result<()> {
    let aliases = extract_aliases(&args.query);
    println!("{}", serde_json::to_string(&aliases)?);
    Ok(())
}

fn label(args: &LabelArgs) -> Result<()> {
    let body = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read response body from stdin")?;
            body
        }
    };

    let labeled = label_response(&body, &args.query);
    println!("{}", serde_json::to_string_pretty(&labeled)?);
    Ok(())
}

/// Credentials for the configured account.
fn credentials(config: &SuiteQlConfig) -> OAuthCredentials {
    OAuthCredentials::new(
        config.account_id.as_str(),
        config.consumer_key.as_str(),
        config.consumer_secret.as_str(),
        config.token_id.as_str(),
        config.token_secret.as_str(),
    )
}

/// The timestamp and nonce to sign, generating whichever was not given.
fn clock(args: ClockArgs, config: &SuiteQlConfig) -> (String, String) {
    (
        args.timestamp.unwrap_or_else(generate_timestamp),
        args.nonce
            .unwrap_or_else(|| generate_nonce(config.nonce_length)),
    )
}

/// A JSON rendering of a request for display.
fn describe(request: &http::Request<String>) -> Value {
    let headers: Map<String, Value> = request
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    json!({
        "method": request.method().as_str(),
        "url": request.uri().to_string(),
        "headers": headers,
        "body": request.body(),
    })
}
