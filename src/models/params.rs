use super::row::FilterCondition;
use serde::{Serialize, Serializer};

/// Parameters for reading rows: pagination plus an optional search condition.
///
/// Zero `offset`/`limit` and an empty `condition` are treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadParams {
    pub offset: u64,
    pub limit: u64,
    pub condition: FilterCondition,
}

impl ReadParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn condition(mut self, condition: FilterCondition) -> Self {
        self.condition = condition;
        self
    }
}

/// Body of an update request.
///
/// `set` is required; the client rejects an empty one before sending anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateParams {
    #[serde(serialize_with = "condition_or_empty")]
    pub condition: Option<FilterCondition>,
    pub set: FilterCondition,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u64,
}

/// Body of a delete request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteParams {
    #[serde(serialize_with = "condition_or_empty")]
    pub condition: Option<FilterCondition>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u64,
}

// The store rejects `"condition": null`, so an absent condition goes out as `{}`.
fn condition_or_empty<S>(
    condition: &Option<FilterCondition>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match condition {
        Some(condition) => condition.serialize(serializer),
        None => FilterCondition::new().serialize(serializer),
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}
