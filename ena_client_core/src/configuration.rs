//! Remote configuration types

use crate::country::Country;
use serde::{Deserialize, Serialize};

/// Number of level buckets per risk parameter
pub const RISK_LEVEL_COUNT: usize = 8;

/// Risk scoring parameters handed to the exposure notification framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureConfiguration {
    pub minimum_risk_score: u8,
    pub attenuation_level_values: [u8; RISK_LEVEL_COUNT],
    pub attenuation_weight: f64,
    pub days_since_last_exposure_level_values: [u8; RISK_LEVEL_COUNT],
    pub days_since_last_exposure_weight: f64,
    pub duration_level_values: [u8; RISK_LEVEL_COUNT],
    pub duration_weight: f64,
    pub transmission_risk_level_values: [u8; RISK_LEVEL_COUNT],
    pub transmission_risk_weight: f64,
    /// Attenuation boundaries in dB splitting exposure durations into buckets
    pub attenuation_duration_thresholds: [u8; 2],
}

impl Default for ExposureConfiguration {
    /// The framework's neutral configuration
    fn default() -> Self {
        Self {
            minimum_risk_score: 0,
            attenuation_level_values: [1; RISK_LEVEL_COUNT],
            attenuation_weight: 50.0,
            days_since_last_exposure_level_values: [1; RISK_LEVEL_COUNT],
            days_since_last_exposure_weight: 50.0,
            duration_level_values: [1; RISK_LEVEL_COUNT],
            duration_weight: 50.0,
            transmission_risk_level_values: [1; RISK_LEVEL_COUNT],
            transmission_risk_weight: 50.0,
            attenuation_duration_thresholds: [50, 70],
        }
    }
}

/// Application configuration served by the distribution server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfiguration {
    pub min_risk_score: u8,
    pub exposure_configuration: ExposureConfiguration,
    pub supported_countries: Vec<Country>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exposure_configuration() {
        let config = ExposureConfiguration::default();
        assert_eq!(config.minimum_risk_score, 0);
        assert_eq!(config.attenuation_duration_thresholds, [50, 70]);
        assert!(config.duration_level_values.iter().all(|&v| v == 1));
        assert_eq!(config.transmission_risk_weight, 50.0);
    }

    #[test]
    fn test_default_app_configuration_embeds_default_exposure_configuration() {
        let config = AppConfiguration::default();
        assert_eq!(config.exposure_configuration, ExposureConfiguration::default());
        assert!(config.supported_countries.is_empty());
    }
}
