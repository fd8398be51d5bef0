pub mod params;
pub mod row;

pub use params::{DeleteParams, ReadParams, UpdateParams};
pub use row::{FilterCondition, RowRecord, UpsertResult, condition};
