//! Client for spreadsheet-backed REST stores, where each sheet of a spreadsheet is
//! exposed as a row collection that can be read, appended to, updated and cleared.
//!
//! ```no_run
//! use sheetstore::{ReadParams, SheetClient, SheetOperations, condition};
//!
//! # async fn run() -> sheetstore::Result<()> {
//! let client = SheetClient::new("https://api.steinhq.com/v1/storages/abc123")?;
//! let params = ReadParams::new()
//!     .limit(10)
//!     .condition(condition([("status", "open")]));
//! for row in client.read("Sheet1", &params).await? {
//!     println!("{:?}", row.get("title"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod util;

pub use config::ClientConfig;
pub use error::{Result, SheetError};
pub use models::{
    DeleteParams, FilterCondition, ReadParams, RowRecord, UpdateParams, UpsertResult, condition,
};
pub use store::{
    Credentials, HttpRequest, HttpResponse, ReqwestTransport, SheetClient, SheetOperations,
    Transport,
};
