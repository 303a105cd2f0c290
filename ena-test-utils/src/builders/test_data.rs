//! Test data builders for submission and download scenarios

use bytes::Bytes;
use ena_client_core::{Country, DownloadedPackage, SubmissionPayload, TemporaryExposureKey};

/// Length of a temporary exposure key in bytes
const KEY_LENGTH: usize = 16;

/// Rolling period of a full-day key, in 10 minute intervals
const FULL_DAY_ROLLING_PERIOD: u32 = 144;

/// Rolling start interval of 2020-06-01T00:00Z
const BASE_ROLLING_START: u32 = 2_651_328;

/// Deterministic key for day `index` before the base date
///
/// Key data is derived from the index so distinct indices give distinct keys.
pub fn sample_key(index: u8) -> TemporaryExposureKey {
    TemporaryExposureKey {
        key_data: Bytes::from(vec![index; KEY_LENGTH]),
        rolling_start_interval_number: BASE_ROLLING_START
            - u32::from(index) * FULL_DAY_ROLLING_PERIOD,
        rolling_period: FULL_DAY_ROLLING_PERIOD,
        transmission_risk_level: 6,
    }
}

/// Builder for submission payloads
#[derive(Debug, Clone)]
pub struct SubmissionPayloadBuilder {
    exposure_keys: Vec<TemporaryExposureKey>,
    visited_countries: Vec<Country>,
    tan: String,
}

impl SubmissionPayloadBuilder {
    pub fn new() -> Self {
        Self {
            exposure_keys: Vec::new(),
            visited_countries: Vec::new(),
            tan: "testTan".to_string(),
        }
    }

    /// Add `count` deterministic keys, one per preceding day
    pub fn with_sample_keys(mut self, count: u8) -> Self {
        self.exposure_keys.extend((0..count).map(sample_key));
        self
    }

    /// Add a key
    pub fn with_key(mut self, key: TemporaryExposureKey) -> Self {
        self.exposure_keys.push(key);
        self
    }

    /// Add a visited country
    pub fn with_visited_country(mut self, country: Country) -> Self {
        self.visited_countries.push(country);
        self
    }

    /// Set the TAN
    pub fn with_tan(mut self, tan: &str) -> Self {
        self.tan = tan.to_string();
        self
    }

    pub fn build(self) -> SubmissionPayload {
        SubmissionPayload {
            exposure_keys: self.exposure_keys,
            visited_countries: self.visited_countries,
            tan: self.tan,
        }
    }
}

impl Default for SubmissionPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for downloaded packages
#[derive(Debug, Clone, Default)]
pub struct PackageBuilder {
    keys_bin: Vec<u8>,
    signature: Vec<u8>,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key export starting with the export file header
    pub fn with_export_header(mut self) -> Self {
        self.keys_bin.extend_from_slice(b"EK Export v1    ");
        self
    }

    /// Append raw bytes to the key export
    pub fn with_keys_bin(mut self, bytes: &[u8]) -> Self {
        self.keys_bin.extend_from_slice(bytes);
        self
    }

    /// Set the signature
    pub fn with_signature(mut self, signature: &[u8]) -> Self {
        self.signature = signature.to_vec();
        self
    }

    pub fn build(self) -> DownloadedPackage {
        DownloadedPackage::new(self.keys_bin, self.signature)
    }
}
