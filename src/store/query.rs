use crate::models::ReadParams;
use serde::Serialize;
use tracing::warn;
use url::form_urlencoded;

/// Build the query string for a read: `offset`, `limit` and `search`, in that order.
///
/// Returns an empty string when nothing is set. A condition that fails to encode
/// as JSON drops the `search` term and keeps the rest.
pub fn query_string(params: &ReadParams) -> String {
    let search = match params.condition.is_empty() {
        true => None,
        false => search_term(&params.condition),
    };
    build(params.offset, params.limit, search)
}

fn build(offset: u64, limit: u64, search: Option<String>) -> String {
    let mut parts = Vec::with_capacity(3);
    if offset > 0 {
        parts.push(format!("offset={}", offset));
    }
    if limit > 0 {
        parts.push(format!("limit={}", limit));
    }
    if let Some(search) = search {
        parts.push(format!("search={}", search));
    }
    parts.join("&")
}

// Generic so any condition shape can be encoded; a `FilterCondition` never fails here.
fn search_term<T: Serialize + ?Sized>(condition: &T) -> Option<String> {
    match serde_json::to_string(condition) {
        Ok(json) => Some(form_urlencoded::byte_serialize(json.as_bytes()).collect()),
        Err(e) => {
            warn!(error = %e, "Failed to encode search condition, omitting search");
            None
        }
    }
}
