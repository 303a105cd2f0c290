//! Validation related error types

use thiserror::Error;

/// Errors raised when constructing domain values from raw input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The country code is not a two-letter ISO 3166 code
    #[error("Invalid country code '{code}': expected two ASCII letters")]
    InvalidCountryCode { code: String },

    /// The test result code is not one the verification server defines
    #[error("Invalid test result code: {code}")]
    InvalidTestResult { code: i32 },
}

impl ValidationError {
    /// Create an invalid country code error
    pub fn invalid_country_code(code: &str) -> Self {
        Self::InvalidCountryCode {
            code: code.to_string(),
        }
    }

    /// Create an invalid test result error
    pub fn invalid_test_result(code: i32) -> Self {
        Self::InvalidTestResult { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_country_code_error() {
        let error = ValidationError::invalid_country_code("XYZ");
        assert!(error.to_string().contains("'XYZ'"));
    }

    #[test]
    fn test_invalid_test_result_error() {
        let error = ValidationError::invalid_test_result(42);
        assert_eq!(error.to_string(), "Invalid test result code: 42");
    }
}
