use http::StatusCode;
use thiserror::Error;

use crate::{status::StatusError, transport::TransportError};

/// Error types for Youverify API operations
#[derive(Debug, Error)]
pub enum YouverifyError {
    /// The subject has not consented to the lookup. No request was sent.
    #[error("Subject consent is required")]
    SubjectConsentRequired,

    /// The request body could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The secret token or header name cannot be sent as an HTTP header
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Base URL and path do not form a valid URL
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// No response was received
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a documented failure status
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The response body does not match the expected shape
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        /// Status of the response that failed to decode
        status: StatusCode,
        /// Decoder error
        source: serde_json::Error,
    },
}

impl YouverifyError {
    /// The documented status error, if the API returned one
    #[must_use]
    pub const fn status(&self) -> Option<StatusError> {
        match self {
            Self::Status(err) => Some(*err),
            _ => None,
        }
    }
}
