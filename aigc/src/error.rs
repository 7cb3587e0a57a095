//! Error types for the Upath AIGC client.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for AIGC operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for AIGC API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the backend, either through a non-2xx status or
    /// through the `ResponseMetadata.Error` envelope inside a 2xx body.
    #[error("{message}")]
    Api {
        /// Human-readable failure message.
        message: String,
        /// HTTP status code of the response that carried the failure.
        http_status: u16,
        /// Parsed response body, kept for diagnostics. An unparseable body
        /// is represented as an empty JSON object.
        response: Value,
    },

    /// HTTP request error. The request never produced a response.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new API error.
    pub(crate) fn api(message: impl Into<String>, http_status: u16, response: Value) -> Self {
        Error::Api {
            message: message.into(),
            http_status,
            response,
        }
    }

    /// Human-readable failure message, available for every variant.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Backend response body attached to an API error.
    pub fn response(&self) -> Option<&Value> {
        match self {
            Error::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the failing response, if one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Api { http_status, .. } => Some(*http_status),
            _ => None,
        }
    }
}
