//! Request failure types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic failure of a network or server interaction
///
/// Every fetch-style client operation reports its failures with this type.
/// The variants mirror what the backend services can answer with, plus the
/// transport-level conditions seen on the device.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestFailure {
    /// The server answered with an unexpected HTTP status
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },

    /// The response could not be interpreted
    #[error("Invalid response")]
    InvalidResponse,

    /// No response was received
    #[error("No response received")]
    NoResponse,

    /// The device has no network connection
    #[error("No network connection")]
    NoNetworkConnection,

    /// The scanned QR code has already been registered
    #[error("QR code already used")]
    QrAlreadyUsed,

    /// The scanned QR code is unknown to the verification server
    #[error("QR code does not exist")]
    QrDoesNotExist,

    /// The teleTAN has already been registered
    #[error("teleTAN already used")]
    TeleTanAlreadyUsed,

    /// The registration token is unknown to the verification server
    #[error("Registration token does not exist")]
    RegTokenNotExist,

    /// The response body was malformed
    #[error("Malformed response")]
    MalformedResponse,

    /// The request could not be built or was rejected as invalid
    #[error("Invalid request")]
    InvalidRequest,

    /// Any other failure
    #[error("Request failed: {message}")]
    Other { message: String },
}

impl RequestFailure {
    /// Create a server error for the given HTTP status
    pub fn server_error(status: u16) -> Self {
        Self::ServerError { status }
    }

    /// Create a generic request failure
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error() {
        let failure = RequestFailure::server_error(503);
        assert_eq!(failure, RequestFailure::ServerError { status: 503 });
        assert!(failure.to_string().contains("503"));
    }

    #[test]
    fn test_unit_failure_messages() {
        assert_eq!(
            RequestFailure::NoNetworkConnection.to_string(),
            "No network connection"
        );
        assert_eq!(
            RequestFailure::TeleTanAlreadyUsed.to_string(),
            "teleTAN already used"
        );
    }

    #[test]
    fn test_other_failure() {
        let failure = RequestFailure::other("socket closed");
        assert_eq!(failure.to_string(), "Request failed: socket closed");
    }
}
