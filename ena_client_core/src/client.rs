//! Client interface to the exposure notification backend
//!
//! The [`Client`] trait is the seam between application code and the
//! distribution, submission and verification servers. Application code
//! depends on `dyn Client`; tests substitute a fake.

use crate::configuration::{AppConfiguration, ExposureConfiguration};
use crate::country::Country;
use crate::error::{RequestFailure, SubmissionError};
use crate::package::{DayId, DownloadedPackage, HourId};
use crate::submission::{RegistrationKeyType, SubmissionPayload};
use async_trait::async_trait;

/// Backend operations used by the app
///
/// Every operation resolves to exactly one result. The `is_fake` flag marks
/// cover traffic: the request is sent so it is indistinguishable on the wire
/// but its outcome is ignored.
#[async_trait]
pub trait Client: Send + Sync {
    /// List the days the distribution server has packages for
    async fn available_days(&self, country: &str) -> Result<Vec<DayId>, RequestFailure>;

    /// List the hours of `day` the distribution server has packages for
    async fn available_hours(
        &self,
        day: &str,
        country: &str,
    ) -> Result<Vec<HourId>, RequestFailure>;

    /// Download the key package of a whole day
    async fn fetch_day(
        &self,
        day: &str,
        country: &str,
    ) -> Result<DownloadedPackage, RequestFailure>;

    /// Download the key package of a single hour
    async fn fetch_hour(
        &self,
        hour: HourId,
        day: &str,
        country: &str,
    ) -> Result<DownloadedPackage, RequestFailure>;

    /// Fetch the application configuration, `None` when unavailable
    async fn app_configuration(&self) -> Option<AppConfiguration>;

    /// Fetch the exposure risk configuration
    async fn exposure_configuration(&self) -> ExposureConfiguration;

    /// Fetch the countries taking part in key exchange
    async fn supported_countries(&self) -> Result<Vec<Country>, RequestFailure>;

    /// Submit diagnosis keys
    async fn submit(
        &self,
        payload: &SubmissionPayload,
        is_fake: bool,
    ) -> Result<(), SubmissionError>;

    /// Exchange a GUID or teleTAN for a registration token
    async fn get_registration_token(
        &self,
        key: &str,
        key_type: RegistrationKeyType,
        is_fake: bool,
    ) -> Result<String, RequestFailure>;

    /// Poll the test result for a registration token
    ///
    /// Returns the raw result code; see [`crate::TestResult`].
    async fn get_test_result(&self, device: &str, is_fake: bool) -> Result<i32, RequestFailure>;

    /// Obtain a TAN authorizing key submission
    async fn get_tan_for_exposure_submit(
        &self,
        device: &str,
        is_fake: bool,
    ) -> Result<String, RequestFailure>;
}
