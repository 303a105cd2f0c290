//! Key package download types

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Identifier of a day on the distribution server, e.g. `2020-06-01`
pub type DayId = String;

/// Identifier of an hour within a day, `0..=23`
pub type HourId = u8;

/// A downloaded exposure key export
///
/// Consists of the binary key export and the signature over it, as served by
/// the distribution server for a single day or hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedPackage {
    pub keys_bin: Bytes,
    pub signature: Bytes,
}

impl DownloadedPackage {
    /// Create a package from its key export and signature
    pub fn new(keys_bin: impl Into<Bytes>, signature: impl Into<Bytes>) -> Self {
        Self {
            keys_bin: keys_bin.into(),
            signature: signature.into(),
        }
    }

    /// A package with empty key export and signature
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both blobs are empty
    pub fn is_empty(&self) -> bool {
        self.keys_bin.is_empty() && self.signature.is_empty()
    }
}

/// Days and hours the distribution server has packages for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysAndHours {
    pub days: Vec<DayId>,
    pub hours: Vec<HourId>,
}

impl DaysAndHours {
    pub fn new(days: Vec<DayId>, hours: Vec<HourId>) -> Self {
        Self { days, hours }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_package() {
        let package = DownloadedPackage::empty();
        assert!(package.keys_bin.is_empty());
        assert!(package.signature.is_empty());
        assert!(package.is_empty());
    }

    #[test]
    fn test_package_with_signature_only_is_not_empty() {
        let package = DownloadedPackage::new(Vec::new(), vec![0x30, 0x45]);
        assert!(!package.is_empty());
    }

    #[test]
    fn test_days_and_hours_default_is_empty() {
        let days_and_hours = DaysAndHours::default();
        assert!(days_and_hours.days.is_empty());
        assert!(days_and_hours.hours.is_empty());
    }
}
