use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::store::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Network-level failure reported by the transport, passed through untouched.
    #[error(transparent)]
    Transport(TransportError),

    #[error("authentication failed: http status code {status}")]
    Authentication { status: u16 },

    #[error("http status code {status}: {message}")]
    Api { status: u16, message: String },

    #[error("decode json error: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("param {param} should have value")]
    InvalidArgument { param: &'static str },

    #[error("encode json error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SheetError {
    /// HTTP status carried by the error, if the remote store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SheetError::Authentication { status } | SheetError::Api { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, SheetError::Authentication { .. })
    }
}

impl From<reqwest::Error> for SheetError {
    fn from(e: reqwest::Error) -> Self {
        SheetError::Transport(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
