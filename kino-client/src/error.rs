//! Client error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::session::TokenStoreError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, broken body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `detail` is the server message when one was parseable
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// 401 from the server
    #[error("Authentication required")]
    Unauthorized(Option<String>),

    /// 2xx response whose body did not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected on the client before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The action needs a logged-in session
    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Token store error: {0}")]
    Store(#[from] TokenStoreError),
}

impl ClientError {
    /// Text shown to the user for this failure.
    ///
    /// Server details are passed through verbatim; everything else gets a
    /// generic line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            }
            | Self::Unauthorized(Some(detail)) => detail.clone(),
            Self::Api { status, detail: None } => format!("Request failed (HTTP {status})"),
            Self::Unauthorized(None) => "Not authenticated".to_string(),
            Self::Http(e) if e.is_timeout() => "The server did not respond in time".to_string(),
            Self::Http(_) => "Network error: the server could not be reached".to_string(),
            Self::InvalidResponse(_) => "Unexpected response from the server".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::NotAuthenticated => "Please log in first".to_string(),
            Self::Config(e) => e.to_string(),
            Self::Store(e) => e.to_string(),
        }
    }

    /// The server rejected the request (any non-2xx)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Unauthorized(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
