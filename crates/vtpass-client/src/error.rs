//! Client error types.

use vtpass_core::{ApiError, ErrorKind};

/// Errors that can occur when using the VTpass client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed for a reason other than its deadline.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The request did not finish before its deadline.
    #[error("request timed out")]
    Timeout,

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-200 response, classified from its envelope code.
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(#[from] ApiError),

    /// HTTP 200 carrying code `011`.
    #[error("service not valid or invalid arguments")]
    InvalidArguments,

    /// HTTP 200 carrying code `012`.
    #[error("product does not exist")]
    ProductNotFound,

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// The error kind, for API and payload-level errors.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(err) => Some(err.kind),
            Self::InvalidArguments => Some(ErrorKind::InvalidArguments),
            Self::ProductNotFound => Some(ErrorKind::ProductDoesNotExist),
            _ => None,
        }
    }

    /// The classified API error, if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the call was cut short by its deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}
