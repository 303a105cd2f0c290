//! Key submission error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a diagnosis key submission
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionError {
    /// The submission server rejected the payload or its headers
    #[error("Invalid payload or headers")]
    InvalidPayloadOrHeaders,

    /// The TAN was rejected
    #[error("Invalid TAN")]
    InvalidTan,

    /// The server answered with an unexpected HTTP status
    #[error("Submission server error: HTTP {status}")]
    ServerError { status: u16 },

    /// The submission request could not be assembled
    #[error("Submission request could not be built")]
    RequestCouldNotBeBuilt,

    /// Any other failure
    #[error("Submission failed: {message}")]
    Other { message: String },
}

impl SubmissionError {
    /// Create a server error for the given HTTP status
    pub fn server_error(status: u16) -> Self {
        Self::ServerError { status }
    }

    /// Create a generic submission error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
