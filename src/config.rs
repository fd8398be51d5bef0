use crate::error::{Result, SheetError};
use crate::store::Credentials;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the store, e.g. `https://api.steinhq.com/v1/storages/<id>`
    pub base_url: String,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    /// Request timeout applied by the default transport
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Reading it from disk is left to the caller.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(contents)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(SheetError::Config("base_url must be set".to_string()));
        }

        Url::parse(&self.base_url).map_err(|e| {
            SheetError::Config(format!("Invalid base_url '{}': {}", self.base_url, e))
        })?;

        if let Some(credentials) = &self.credentials
            && credentials.username.is_empty()
        {
            return Err(SheetError::Config(
                "credentials.username must be set when credentials are given".to_string(),
            ));
        }

        Ok(())
    }
}
