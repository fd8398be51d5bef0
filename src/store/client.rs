use super::SheetOperations;
use crate::config::ClientConfig;
use crate::error::{Result, SheetError};
use crate::models::row::DeleteResponse;
use crate::models::{DeleteParams, ReadParams, RowRecord, UpdateParams, UpsertResult};
use crate::store::auth::Credentials;
use crate::store::query::query_string;
use crate::store::response;
use crate::store::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::util::{remove_prefix, remove_suffix};
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Client for a single spreadsheet exposed as a REST store.
///
/// Holds no mutable state, so a shared reference can be used from many tasks at once.
#[derive(Clone)]
pub struct SheetClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
}

impl SheetClient {
    /// Create a client for `base_url`, e.g. `https://api.steinhq.com/v1/storages/<id>`,
    /// using a default [`ReqwestTransport`].
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = remove_suffix(base_url, "/");
        Url::parse(base_url)
            .map_err(|e| SheetError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            base_url: base_url.to_string(),
            transport: Arc::new(ReqwestTransport::default()),
            credentials: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut client = Self::new(&config.base_url)?;

        if let Some(secs) = config.timeout_secs {
            let transport = ReqwestTransport::with_timeout(Duration::from_secs(secs))
                .map_err(|e| SheetError::Config(format!("Failed to build HTTP client: {}", e)))?;
            client.transport = Arc::new(transport);
        }
        if let Some(credentials) = &config.credentials {
            client.credentials = Some(credentials.clone());
        }

        Ok(client)
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url(&self, sheet: &str, query: &str) -> Result<Url> {
        let sheet = remove_prefix(sheet, "/");
        // Url::parse resolves dot segments, which would leave the storage path.
        if sheet.split(['/', '\\']).any(is_dot_segment) {
            return Err(SheetError::InvalidArgument { param: "sheet" });
        }

        let mut resource = format!("{}/{}", self.base_url, sheet);
        if !query.is_empty() {
            resource.push('?');
            resource.push_str(query);
        }

        Url::parse(&resource).map_err(|_| SheetError::InvalidArgument { param: "sheet" })
    }

    fn headers(&self, has_body: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }
        if let Some(credentials) = &self.credentials {
            let value = credentials
                .header_value()
                .map_err(|_| SheetError::InvalidArgument { param: "credentials" })?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
            headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        }
        Ok(headers)
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(SheetError::Encode)
    }

    /// Send one request, validate the status and decode the body as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let headers = self.headers(body.is_some())?;
        debug!(%method, %url, "Sending request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(SheetError::Transport)?;

        debug!(status = response.status.as_u16(), "Received response");
        response::decode(&response)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e." | ".%2e" | "%2e%2e"
    )
}

#[async_trait]
impl SheetOperations for SheetClient {
    #[instrument(name = "Listing sheets", skip_all)]
    async fn list_sheets(&self) -> Result<Vec<String>> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| SheetError::Config(format!("Invalid base URL: {}", e)))?;
        self.execute(Method::GET, url, None).await
    }

    #[instrument(name = "Reading sheet", skip_all, fields(sheet = %sheet))]
    async fn read(&self, sheet: &str, params: &ReadParams) -> Result<Vec<RowRecord>> {
        let url = self.resource_url(sheet, &query_string(params))?;
        let rows: Vec<RowRecord> = self.execute(Method::GET, url, None).await?;
        debug!(rows = rows.len(), "Read rows");
        Ok(rows)
    }

    #[instrument(
        name = "Appending rows",
        skip_all,
        fields(sheet = %sheet, rows = rows.len())
    )]
    async fn append(&self, sheet: &str, rows: &[RowRecord]) -> Result<UpsertResult> {
        let url = self.resource_url(sheet, "")?;
        let body = Self::encode(rows)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    #[instrument(name = "Updating rows", skip_all, fields(sheet = %sheet))]
    async fn update(&self, sheet: &str, params: &UpdateParams) -> Result<UpsertResult> {
        if params.set.is_empty() {
            return Err(SheetError::InvalidArgument { param: "set" });
        }

        let url = self.resource_url(sheet, "")?;
        let body = Self::encode(params)?;
        self.execute(Method::PUT, url, Some(body)).await
    }

    #[instrument(name = "Deleting rows", skip_all, fields(sheet = %sheet))]
    async fn delete(&self, sheet: &str, params: &DeleteParams) -> Result<u64> {
        let url = self.resource_url(sheet, "")?;
        let body = Self::encode(params)?;
        let result: DeleteResponse = self.execute(Method::DELETE, url, Some(body)).await?;
        debug!(cleared = result.cleared_rows_count, "Deleted rows");
        Ok(result.cleared_rows_count)
    }
}
