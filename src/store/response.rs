use crate::error::{Result, SheetError};
use crate::store::transport::HttpResponse;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Classify a response by status before its body is trusted.
pub fn validate(status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(SheetError::Authentication {
            status: status.as_u16(),
        });
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_default();

    Err(SheetError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Validate the response, then decode its body as `T`.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    validate(response.status, &response.body)?;
    serde_json::from_slice(&response.body).map_err(SheetError::MalformedResponse)
}
