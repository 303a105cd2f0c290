//! Error types for the ENA client core library
//!
//! Errors are split by the operation family that produces them, so callers
//! can match on exactly the failures an operation is able to report.

use thiserror::Error;

pub mod request;
pub mod submission;
pub mod validation;

pub use self::request::RequestFailure;
pub use self::submission::SubmissionError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ENA client core library
///
/// Errors are categorized into three kinds:
/// - Request failures: transport or server failures of fetch-style calls
/// - Submission errors: failures specific to key submission
/// - Validation errors: malformed domain values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Request related errors
    #[error(transparent)]
    Request(#[from] RequestFailure),

    /// Key submission errors
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failure_conversion() {
        let error: Error = RequestFailure::NoNetworkConnection.into();
        assert_eq!(error, Error::Request(RequestFailure::NoNetworkConnection));
        assert!(error.to_string().contains("No network connection"));
    }

    #[test]
    fn test_submission_error_conversion() {
        let error: Error = SubmissionError::InvalidTan.into();
        assert!(matches!(error, Error::Submission(SubmissionError::InvalidTan)));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let inner = ValidationError::invalid_country_code("D1");
        let message = inner.to_string();
        let error: Error = inner.into();
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as StdError;

        let error: Error = RequestFailure::server_error(503).into();
        // transparent variants forward source() to the inner error
        assert!(error.source().is_none());
    }
}
