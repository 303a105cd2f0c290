//! Key submission and test verification types

use crate::country::Country;
use crate::error::ValidationError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A temporary exposure key as exported by the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryExposureKey {
    pub key_data: Bytes,
    pub rolling_start_interval_number: u32,
    pub rolling_period: u32,
    pub transmission_risk_level: u8,
}

/// Keys and metadata sent to the submission server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub exposure_keys: Vec<TemporaryExposureKey>,
    pub visited_countries: Vec<Country>,
    pub tan: String,
}

/// Kind of key exchanged for a registration token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationKeyType {
    /// Hashed GUID scanned from a QR code
    #[serde(rename = "GUID")]
    Guid,
    /// teleTAN handed out by the hotline
    #[serde(rename = "TELETAN")]
    TeleTan,
}

impl RegistrationKeyType {
    /// Value sent to the verification server
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guid => "GUID",
            Self::TeleTan => "TELETAN",
        }
    }
}

impl fmt::Display for RegistrationKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a test as reported by the verification server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResult {
    Pending = 0,
    Negative = 1,
    Positive = 2,
    Invalid = 3,
    Redeemed = 4,
}

impl TestResult {
    /// Raw code used on the wire
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for TestResult {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Negative),
            2 => Ok(Self::Positive),
            3 => Ok(Self::Invalid),
            4 => Ok(Self::Redeemed),
            other => Err(ValidationError::invalid_test_result(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_key_type_wire_values() {
        assert_eq!(RegistrationKeyType::Guid.as_str(), "GUID");
        assert_eq!(RegistrationKeyType::TeleTan.to_string(), "TELETAN");
    }

    #[test]
    fn test_test_result_codes() {
        assert_eq!(TestResult::Pending.code(), 0);
        assert_eq!(TestResult::Positive.code(), 2);
        assert_eq!(TestResult::try_from(4), Ok(TestResult::Redeemed));
    }

    #[test]
    fn test_unknown_test_result_code() {
        assert_eq!(
            TestResult::try_from(7),
            Err(ValidationError::invalid_test_result(7))
        );
        assert!(TestResult::try_from(-1).is_err());
    }

    #[test]
    fn test_default_payload_is_empty() {
        let payload = SubmissionPayload::default();
        assert!(payload.exposure_keys.is_empty());
        assert!(payload.visited_countries.is_empty());
        assert!(payload.tan.is_empty());
    }
}
