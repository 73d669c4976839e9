//! Column alias extraction from SuiteQL text.
//!
//! SuiteQL returns result rows keyed by lower-cased column names. Callers
//! that want the labels the query author wrote pull them from the `AS` clauses
//! of the query text and attach them to the response positionally.
//!
//! The scan is a single regex pass. It does not know about string literals or
//! comments, so an `AS` inside either is picked up too.

use std::sync::LazyLock;

use regex::Regex;

/// `AS`, one or more spaces, then a quoted or a bare identifier.
///
/// The opening and closing quote characters need not match.
static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bAS +(?:["'`]([^"'`]+)["'`]|(\w+))"#).expect("alias pattern is valid")
});

/// Extract the column aliases of a query, in the order they appear.
///
/// Line breaks are treated as spaces. Clauses that do not match (for example
/// an unterminated quote) are skipped, so the result may be empty.
///
/// # Examples
///
/// ```
/// use suiteql_query::alias::extract_aliases;
///
/// let aliases = extract_aliases(
///     r#"SELECT id AS "Customer ID", total AS amt FROM transaction"#,
/// );
/// assert_eq!(aliases, ["Customer ID", "amt"]);
/// assert!(extract_aliases("SELECT id FROM customer").is_empty());
/// ```
#[must_use]
pub fn extract_aliases(query: &str) -> Vec<String> {
    let normalized = query.replace(['\r', '\n'], " ");

    ALIAS_PATTERN
        .captures_iter(normalized.trim())
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_owned())
        .collect()
}
