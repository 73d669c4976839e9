//! Merging column aliases into SuiteQL responses.
//!
//! A SuiteQL response looks like:
//!
//! ```json
//! {
//!   "links": [],
//!   "count": 2, "hasMore": false, "offset": 0, "totalResults": 2,
//!   "items": [{ "links": [], "id": "1", "amt": "10.00" }]
//! }
//! ```
//!
//! The extracted aliases are added as a top-level `columns` array. Rows are
//! left untouched.

use serde_json::{Map, Value, json};
use tracing::warn;

use crate::alias::extract_aliases;

/// Insert `columns` into a JSON object response.
///
/// Any existing `columns` entry is replaced. Returns `false`, leaving the
/// value untouched, when the response is not a JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use suiteql_query::columns::attach_columns;
///
/// let mut response = json!({ "items": [] });
/// assert!(attach_columns(&mut response, &["a".to_owned()]));
/// assert_eq!(response["columns"], json!(["a"]));
/// ```
pub fn attach_columns(response: &mut Value, aliases: &[String]) -> bool {
    let Value::Object(object) = response else {
        return false;
    };

    if let Some(count) = column_count_in(object)
        && count != aliases.len()
    {
        warn!(
            columns = count,
            aliases = aliases.len(),
            "Alias count does not match result column count"
        );
    }

    object.insert(
        "columns".to_owned(),
        Value::Array(aliases.iter().cloned().map(Value::String).collect()),
    );
    true
}

/// Number of columns in the first result row, not counting `links`.
///
/// Returns `None` if the response has no rows.
#[must_use]
pub fn column_count(response: &Value) -> Option<usize> {
    response.as_object().and_then(column_count_in)
}

/// The object returned in place of a body that is not valid JSON.
///
/// # Examples
///
/// ```
/// use suiteql_query::columns::error_response;
///
/// let value = error_response("<html>");
/// assert_eq!(value["error"], "Invalid JSON response");
/// assert_eq!(value["raw"], "<html>");
/// ```
#[must_use]
pub fn error_response(raw: &str) -> Value {
    json!({
        "error": "Invalid JSON response",
        "raw": raw,
    })
}

/// Decode a raw response body and label it with the aliases of `query`.
///
/// Undecodable bodies become an [`error_response`], which is labeled as well.
#[must_use]
pub fn label_response(body: &str, query: &str) -> Value {
    let mut response = serde_json::from_str(body).unwrap_or_else(|_| error_response(body));
    attach_columns(&mut response, &extract_aliases(query));
    response
}

fn column_count_in(object: &Map<String, Value>) -> Option<usize> {
    let row = object.get("items")?.as_array()?.first()?.as_object()?;
    Some(row.keys().filter(|key| *key != "links").count())
}
