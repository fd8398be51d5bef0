use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name to expected value. Empty means "every row".
pub type FilterCondition = BTreeMap<String, String>;

/// A schema-free row: column name to any JSON value.
pub type RowRecord = serde_json::Map<String, serde_json::Value>;

/// What the store reports as written after an append or update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResult {
    // e.g. "Sheet1!A3:B3"
    pub updated_range: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteResponse {
    pub(crate) cleared_rows_count: u64,
}

/// Build a [`FilterCondition`] from string pairs.
pub fn condition<K, V, I>(pairs: I) -> FilterCondition
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
