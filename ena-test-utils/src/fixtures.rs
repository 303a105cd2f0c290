//! Fixture configuration for fake clients
//!
//! A fixture describes the canned data of a [`FakeClient`] in TOML, so
//! scenarios can be shared between test suites. Loading is layered:
//! defaults, then the fixture file, then `ENA_FAKE_` environment variables.
//!
//! ```toml
//! days = ["2020-06-01", "2020-06-02"]
//! hours = [0, 1, 2]
//! request_failure = "no_network_connection"
//! supported_countries = ["DE", "FR"]
//!
//! [package]
//! keys_bin = [1, 2, 3]
//! signature = [4, 5]
//! ```

use crate::mocks::FakeClient;
use ena_client_core::{
    Country, DaysAndHours, DownloadedPackage, RequestFailure, SubmissionError, ValidationError,
};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Prefix of environment variables overriding fixture values
pub const ENV_PREFIX: &str = "ENA_FAKE_";

/// Errors raised while loading a fixture or building a client from it
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The fixture could not be read or extracted
    #[error("Failed to load fixture: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The fixture contains an invalid value
    #[error("Invalid fixture: {0}")]
    Invalid(#[from] ValidationError),
}

/// Package blobs as stored in a fixture
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PackageFixture {
    pub keys_bin: Vec<u8>,
    pub signature: Vec<u8>,
}

/// Canned data of a fake client
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FakeClientConfig {
    pub days: Vec<String>,
    pub hours: Vec<u8>,
    pub package: Option<PackageFixture>,
    pub request_failure: Option<RequestFailure>,
    pub submission_error: Option<SubmissionError>,
    /// Replaces the default country list when set
    pub supported_countries: Option<Vec<String>>,
}

impl FakeClientConfig {
    /// Parse a fixture from TOML source, without environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self, FixtureError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()
            .map_err(|e| FixtureError::Load(Box::new(e)))
    }

    /// Build a fake client serving this fixture
    ///
    /// Unlike the built-in default list, fixture country codes are not
    /// skipped when invalid: a typo in a fixture is reported.
    pub fn build_client(self) -> Result<FakeClient, FixtureError> {
        let supported_countries = self
            .supported_countries
            .map(|codes| {
                codes
                    .iter()
                    .map(|code| Country::new(code))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let mut builder = FakeClient::builder()
            .with_days_and_hours(DaysAndHours::new(self.days, self.hours));
        if let Some(package) = self.package {
            builder = builder
                .with_downloaded_package(DownloadedPackage::new(package.keys_bin, package.signature));
        }
        if let Some(error) = self.submission_error {
            builder = builder.with_submission_error(error);
        }
        if let Some(failure) = self.request_failure {
            builder = builder.with_request_failure(failure);
        }

        let mut client = builder.build();
        if let Some(countries) = supported_countries {
            client.supported_countries = countries;
        }

        log::debug!("Built fake client from fixture: {client:?}");
        Ok(client)
    }
}

/// Loads fixtures with layered priority: ENV > File > Defaults
#[derive(Debug, Default, Clone)]
pub struct FixtureLoader {
    path: Option<PathBuf>,
}

impl FixtureLoader {
    /// Load from defaults and environment only
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the given fixture file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn load(&self) -> Result<FakeClientConfig, FixtureError> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(FakeClientConfig::default()));

        // Layer 2: Fixture file (if exists)
        if let Some(path) = &self.path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            } else {
                log::warn!("Fixture file {path:?} does not exist, using defaults");
            }
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .map_err(|e| FixtureError::Load(Box::new(e)))
    }

    /// Load the fixture and build a fake client from it
    pub fn load_client(&self) -> Result<FakeClient, FixtureError> {
        self.load()?.build_client()
    }
}
