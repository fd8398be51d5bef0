mod auth;
mod client;
pub mod query;
pub mod response;
mod transport;

pub use auth::Credentials;
pub use client::SheetClient;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use crate::error::Result;
use crate::models::{DeleteParams, ReadParams, RowRecord, UpdateParams, UpsertResult};
use async_trait::async_trait;

#[async_trait]
pub trait SheetOperations {
    /// Names of the sheets in the spreadsheet.
    async fn list_sheets(&self) -> Result<Vec<String>>;

    async fn read(&self, sheet: &str, params: &ReadParams) -> Result<Vec<RowRecord>>;

    async fn append(&self, sheet: &str, rows: &[RowRecord]) -> Result<UpsertResult>;

    async fn update(&self, sheet: &str, params: &UpdateParams) -> Result<UpsertResult>;

    /// Returns the number of cleared rows.
    async fn delete(&self, sheet: &str, params: &DeleteParams) -> Result<u64>;
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use crate::error::TransportError;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};

    /// Transport that records every request and replays a canned response.
    #[derive(Clone)]
    pub(crate) struct SpyTransport {
        pub status: StatusCode,
        pub body: Vec<u8>,
        pub requests: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl SpyTransport {
        pub(crate) fn new(status: u16, body: &str) -> Self {
            Self {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.as_bytes().to_vec(),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        pub(crate) fn last_body(&self) -> serde_json::Value {
            let body = self.last_request().body.unwrap();
            serde_json::from_slice(&body).unwrap()
        }
    }

    #[async_trait]
    impl Transport for SpyTransport {
        async fn send(
            &self,
            request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    /// Transport whose every call fails before a response exists.
    pub(crate) struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }
}
