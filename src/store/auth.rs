use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{HeaderValue, InvalidHeaderValue};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::fmt;

/// Static HTTP basic-auth credentials.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// `Authorization` header value, marked sensitive so it is redacted from `Debug`.
    pub(super) fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            self.username,
            self.password.expose_secret()
        ));
        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}
