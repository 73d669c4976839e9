//! End-to-end tests for SuiteQL request signing and result labeling.
//!
//! These tests drive the public APIs of `suiteql-core`, `suiteql-auth` and
//! `suiteql-query` together with fixed timestamps and nonces, so every
//! signature is reproducible. No network access is needed.
//!
//! Run them with:
//! ```text
//! cargo test -p suiteql-integration
//! ```

use std::collections::HashMap;
use std::sync::Once;

use suiteql_auth::OAuthCredentials;
use suiteql_core::SuiteQlConfig;

static INIT: Once = Once::new();

/// Endpoint used by every signing scenario.
pub const TEST_ENDPOINT: &str = "https://x.example.com/query/v1/suiteql";

/// Fixed timestamp used by every signing scenario.
pub const TEST_TIMESTAMP: &str = "1700000000";

/// Fixed nonce used by every signing scenario.
pub const TEST_NONCE: &str = "abc123";

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Credentials shared by the signing scenarios.
#[must_use]
pub fn test_credentials() -> OAuthCredentials {
    init_tracing();
    OAuthCredentials::new("1234567", "CK", "CS", "TK", "TS")
}

/// Configuration loaded from a fixed variable map pointing at [`TEST_ENDPOINT`].
#[must_use]
pub fn test_config() -> SuiteQlConfig {
    init_tracing();
    let env = HashMap::from([
        ("NETSUITE_ACCOUNT_ID", "1234567"),
        ("NETSUITE_CONSUMER_KEY", "CK"),
        ("NETSUITE_CONSUMER_SECRET", "CS"),
        ("NETSUITE_TOKEN_ID", "TK"),
        ("NETSUITE_TOKEN_SECRET", "TS"),
        ("NETSUITE_SUITEQL_URL", TEST_ENDPOINT),
    ]);
    SuiteQlConfig::from_lookup(|key| env.get(key).map(|v| (*v).to_owned()))
        .unwrap_or_else(|e| panic!("failed to load test configuration: {e}"))
}

mod test_query;
mod test_signing;
