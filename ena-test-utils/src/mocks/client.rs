//! Fake implementation of the ENA backend client for testing

use crate::fixtures::{FakeClientConfig, FixtureError};
use async_trait::async_trait;
use ena_client_core::{
    AppConfiguration, Client, Country, DayId, DaysAndHours, DownloadedPackage,
    ExposureConfiguration, HourId, RegistrationKeyType, RequestFailure, SubmissionError,
    SubmissionPayload, TestResult,
};
use std::fmt;
use std::sync::Arc;

/// Country codes the fake reports as supported unless told otherwise
pub const DEFAULT_COUNTRY_CODES: [&str; 13] = [
    "DE", "IT", "ES", "PL", "NL", "BE", "CZ", "AT", "DK", "IE", "LT", "LV", "EE",
];

/// Token returned by `get_registration_token` without an override
pub const DUMMY_REGISTRATION_TOKEN: &str = "dummyRegistrationToken";

/// TAN returned by `get_tan_for_exposure_submit` without an override
pub const DUMMY_TAN: &str = "dummyTan";

pub type AppConfigurationHandler = Arc<dyn Fn() -> Option<AppConfiguration> + Send + Sync>;
pub type SupportedCountriesHandler =
    Arc<dyn Fn() -> Result<Vec<Country>, RequestFailure> + Send + Sync>;
pub type SubmitHandler =
    Arc<dyn Fn(&SubmissionPayload, bool) -> Result<(), SubmissionError> + Send + Sync>;
pub type RegistrationTokenHandler =
    Arc<dyn Fn(&str, RegistrationKeyType, bool) -> Result<String, RequestFailure> + Send + Sync>;
pub type TestResultHandler = Arc<dyn Fn(&str, bool) -> Result<i32, RequestFailure> + Send + Sync>;
pub type TanHandler = Arc<dyn Fn(&str, bool) -> Result<String, RequestFailure> + Send + Sync>;

/// Configurable fake implementation of [`Client`]
///
/// Returns canned values or injected failures instead of talking to a
/// server. All configuration is held in public fields so tests can adjust
/// behavior between calls; every call resolves immediately.
///
/// Resolution order per operation:
/// - days, hours, day and hour packages: `request_failure` if set, otherwise
///   the configured value (an empty package when none is configured)
/// - supported countries, registration token, test result and TAN: the
///   override handler if set, otherwise a fixed default
/// - submission and app configuration: always their handler, which starts
///   out as a canned default
///
/// # Examples
///
/// ```rust,no_run
/// use ena_client_core::{Client, RequestFailure};
/// use ena_test_utils::FakeClient;
///
/// # async fn example() {
/// let mut client = FakeClient::builder()
///     .with_days(vec!["2020-06-01".to_string()])
///     .build();
/// assert_eq!(client.available_days("DE").await.unwrap(), vec!["2020-06-01"]);
///
/// client.request_failure = Some(RequestFailure::NoNetworkConnection);
/// assert!(client.available_days("DE").await.is_err());
/// # }
/// ```
#[derive(Clone)]
pub struct FakeClient {
    pub days_and_hours: DaysAndHours,
    pub downloaded_package: Option<DownloadedPackage>,
    pub request_failure: Option<RequestFailure>,
    pub supported_countries: Vec<Country>,

    pub on_app_configuration: AppConfigurationHandler,
    pub on_submit: SubmitHandler,
    pub on_supported_countries: Option<SupportedCountriesHandler>,
    pub on_get_registration_token: Option<RegistrationTokenHandler>,
    pub on_get_test_result: Option<TestResultHandler>,
    pub on_get_tan: Option<TanHandler>,
}

fn no_app_configuration() -> Option<AppConfiguration> {
    None
}

fn accept_submission(_payload: &SubmissionPayload, _is_fake: bool) -> Result<(), SubmissionError> {
    Ok(())
}

fn rejecting_submit_handler(error: SubmissionError) -> SubmitHandler {
    Arc::new(
        move |_payload: &SubmissionPayload, _is_fake: bool| -> Result<(), SubmissionError> {
            Err(error.clone())
        },
    )
}

/// The default supported countries, skipping codes that fail validation
pub fn default_supported_countries() -> Vec<Country> {
    DEFAULT_COUNTRY_CODES
        .iter()
        .filter_map(|code| Country::new(code).ok())
        .collect()
}

impl FakeClient {
    /// Create a fake client with default behavior
    pub fn new() -> Self {
        Self {
            days_and_hours: DaysAndHours::default(),
            downloaded_package: None,
            request_failure: None,
            supported_countries: default_supported_countries(),
            on_app_configuration: Arc::new(no_app_configuration),
            on_submit: Arc::new(accept_submission),
            on_supported_countries: None,
            on_get_registration_token: None,
            on_get_test_result: None,
            on_get_tan: None,
        }
    }

    /// Start configuring a fake client
    pub fn builder() -> FakeClientBuilder {
        FakeClientBuilder::default()
    }

    /// Create a fake client from a loaded fixture
    pub fn from_config(config: FakeClientConfig) -> Result<Self, FixtureError> {
        config.build_client()
    }

    /// Provide the app configuration returned by `app_configuration`
    pub fn set_on_app_configuration<F>(&mut self, handler: F)
    where
        F: Fn() -> Option<AppConfiguration> + Send + Sync + 'static,
    {
        self.on_app_configuration = Arc::new(handler);
    }

    /// Handle `submit`, replacing any configured submission error
    pub fn set_on_submit<F>(&mut self, handler: F)
    where
        F: Fn(&SubmissionPayload, bool) -> Result<(), SubmissionError> + Send + Sync + 'static,
    {
        self.on_submit = Arc::new(handler);
    }

    /// Make every `submit` fail with `error`
    pub fn fail_submissions_with(&mut self, error: SubmissionError) {
        self.on_submit = rejecting_submit_handler(error);
    }

    /// Override `supported_countries`
    pub fn set_on_supported_countries<F>(&mut self, handler: F)
    where
        F: Fn() -> Result<Vec<Country>, RequestFailure> + Send + Sync + 'static,
    {
        self.on_supported_countries = Some(Arc::new(handler));
    }

    /// Override `get_registration_token`
    pub fn set_on_get_registration_token<F>(&mut self, handler: F)
    where
        F: Fn(&str, RegistrationKeyType, bool) -> Result<String, RequestFailure>
            + Send
            + Sync
            + 'static,
    {
        self.on_get_registration_token = Some(Arc::new(handler));
    }

    /// Override `get_test_result`
    pub fn set_on_get_test_result<F>(&mut self, handler: F)
    where
        F: Fn(&str, bool) -> Result<i32, RequestFailure> + Send + Sync + 'static,
    {
        self.on_get_test_result = Some(Arc::new(handler));
    }

    /// Override `get_tan_for_exposure_submit`
    pub fn set_on_get_tan<F>(&mut self, handler: F)
    where
        F: Fn(&str, bool) -> Result<String, RequestFailure> + Send + Sync + 'static,
    {
        self.on_get_tan = Some(Arc::new(handler));
    }

    fn package(&self) -> DownloadedPackage {
        self.downloaded_package
            .clone()
            .unwrap_or_else(DownloadedPackage::empty)
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeClient")
            .field("days_and_hours", &self.days_and_hours)
            .field("downloaded_package", &self.downloaded_package)
            .field("request_failure", &self.request_failure)
            .field("supported_countries", &self.supported_countries)
            .field(
                "on_supported_countries",
                &self.on_supported_countries.is_some(),
            )
            .field(
                "on_get_registration_token",
                &self.on_get_registration_token.is_some(),
            )
            .field("on_get_test_result", &self.on_get_test_result.is_some())
            .field("on_get_tan", &self.on_get_tan.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Client for FakeClient {
    async fn available_days(&self, country: &str) -> Result<Vec<DayId>, RequestFailure> {
        if let Some(failure) = &self.request_failure {
            log::debug!("available_days({country}): failing with configured failure: {failure}");
            return Err(failure.clone());
        }

        log::debug!(
            "available_days({country}): returning {} configured days",
            self.days_and_hours.days.len()
        );
        Ok(self.days_and_hours.days.clone())
    }

    async fn available_hours(
        &self,
        day: &str,
        country: &str,
    ) -> Result<Vec<HourId>, RequestFailure> {
        if let Some(failure) = &self.request_failure {
            log::debug!(
                "available_hours({day}, {country}): failing with configured failure: {failure}"
            );
            return Err(failure.clone());
        }

        log::debug!(
            "available_hours({day}, {country}): returning {} configured hours",
            self.days_and_hours.hours.len()
        );
        Ok(self.days_and_hours.hours.clone())
    }

    async fn fetch_day(
        &self,
        day: &str,
        country: &str,
    ) -> Result<DownloadedPackage, RequestFailure> {
        if let Some(failure) = &self.request_failure {
            log::debug!("fetch_day({day}, {country}): failing with configured failure: {failure}");
            return Err(failure.clone());
        }

        log::debug!(
            "fetch_day({day}, {country}): configured package: {}",
            self.downloaded_package.is_some()
        );
        Ok(self.package())
    }

    async fn fetch_hour(
        &self,
        hour: HourId,
        day: &str,
        country: &str,
    ) -> Result<DownloadedPackage, RequestFailure> {
        if let Some(failure) = &self.request_failure {
            log::debug!(
                "fetch_hour({hour}, {day}, {country}): failing with configured failure: {failure}"
            );
            return Err(failure.clone());
        }

        log::debug!(
            "fetch_hour({hour}, {day}, {country}): configured package: {}",
            self.downloaded_package.is_some()
        );
        Ok(self.package())
    }

    async fn app_configuration(&self) -> Option<AppConfiguration> {
        log::debug!("app_configuration: invoking provider");
        (self.on_app_configuration)()
    }

    async fn exposure_configuration(&self) -> ExposureConfiguration {
        log::debug!("exposure_configuration: returning default configuration");
        ExposureConfiguration::default()
    }

    async fn supported_countries(&self) -> Result<Vec<Country>, RequestFailure> {
        match &self.on_supported_countries {
            Some(handler) => {
                log::debug!("supported_countries: delegating to override");
                handler()
            }
            None => {
                log::debug!(
                    "supported_countries: returning {} configured countries",
                    self.supported_countries.len()
                );
                Ok(self.supported_countries.clone())
            }
        }
    }

    async fn submit(
        &self,
        payload: &SubmissionPayload,
        is_fake: bool,
    ) -> Result<(), SubmissionError> {
        log::debug!(
            "submit: {} keys, {} visited countries, fake={is_fake}",
            payload.exposure_keys.len(),
            payload.visited_countries.len()
        );
        (self.on_submit)(payload, is_fake)
    }

    async fn get_registration_token(
        &self,
        key: &str,
        key_type: RegistrationKeyType,
        is_fake: bool,
    ) -> Result<String, RequestFailure> {
        log::trace!("get_registration_token: key={key}");
        match &self.on_get_registration_token {
            Some(handler) => {
                log::debug!("get_registration_token({key_type}, fake={is_fake}): override");
                handler(key, key_type, is_fake)
            }
            None => {
                log::debug!("get_registration_token({key_type}, fake={is_fake}): default token");
                Ok(DUMMY_REGISTRATION_TOKEN.to_string())
            }
        }
    }

    async fn get_test_result(&self, device: &str, is_fake: bool) -> Result<i32, RequestFailure> {
        log::trace!("get_test_result: device={device}");
        match &self.on_get_test_result {
            Some(handler) => {
                log::debug!("get_test_result(fake={is_fake}): override");
                handler(device, is_fake)
            }
            None => {
                log::debug!("get_test_result(fake={is_fake}): default positive result");
                Ok(TestResult::Positive.code())
            }
        }
    }

    async fn get_tan_for_exposure_submit(
        &self,
        device: &str,
        is_fake: bool,
    ) -> Result<String, RequestFailure> {
        log::trace!("get_tan_for_exposure_submit: device={device}");
        match &self.on_get_tan {
            Some(handler) => {
                log::debug!("get_tan_for_exposure_submit(fake={is_fake}): override");
                handler(device, is_fake)
            }
            None => {
                log::debug!("get_tan_for_exposure_submit(fake={is_fake}): default TAN");
                Ok(DUMMY_TAN.to_string())
            }
        }
    }
}

/// Builder mirroring the optional values a fake client is usually set up with
#[derive(Debug, Clone, Default)]
pub struct FakeClientBuilder {
    days_and_hours: DaysAndHours,
    downloaded_package: Option<DownloadedPackage>,
    submission_error: Option<SubmissionError>,
    request_failure: Option<RequestFailure>,
}

impl FakeClientBuilder {
    /// Days and hours returned by the listing operations
    pub fn with_days_and_hours(mut self, days_and_hours: DaysAndHours) -> Self {
        self.days_and_hours = days_and_hours;
        self
    }

    /// Days returned by `available_days`
    pub fn with_days(mut self, days: Vec<DayId>) -> Self {
        self.days_and_hours.days = days;
        self
    }

    /// Hours returned by `available_hours`
    pub fn with_hours(mut self, hours: Vec<HourId>) -> Self {
        self.days_and_hours.hours = hours;
        self
    }

    /// Package returned by `fetch_day` and `fetch_hour`
    pub fn with_downloaded_package(mut self, package: DownloadedPackage) -> Self {
        self.downloaded_package = Some(package);
        self
    }

    /// Make `submit` fail with `error`
    pub fn with_submission_error(mut self, error: SubmissionError) -> Self {
        self.submission_error = Some(error);
        self
    }

    /// Make the listing and download operations fail with `failure`
    pub fn with_request_failure(mut self, failure: RequestFailure) -> Self {
        self.request_failure = Some(failure);
        self
    }

    pub fn build(self) -> FakeClient {
        let mut client = FakeClient::new();
        client.days_and_hours = self.days_and_hours;
        client.downloaded_package = self.downloaded_package;
        client.request_failure = self.request_failure;

        if let Some(error) = self.submission_error {
            client.on_submit = rejecting_submit_handler(error);
        }

        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_supported_countries_keep_order() {
        let codes: Vec<String> = default_supported_countries()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(codes, DEFAULT_COUNTRY_CODES);
    }

    #[test]
    fn test_builder_sets_fields() {
        let failure = RequestFailure::server_error(500);
        let client = FakeClient::builder()
            .with_days(vec!["2020-06-01".to_string()])
            .with_hours(vec![3, 4])
            .with_request_failure(failure.clone())
            .build();

        assert_eq!(client.days_and_hours.days, vec!["2020-06-01"]);
        assert_eq!(client.days_and_hours.hours, vec![3, 4]);
        assert_eq!(client.request_failure, Some(failure));
        assert!(client.downloaded_package.is_none());
    }

    #[tokio::test]
    async fn test_builder_submission_error_installs_failing_handler() {
        let client = FakeClient::builder()
            .with_submission_error(SubmissionError::RequestCouldNotBeBuilt)
            .build();

        assert_eq!(
            client.submit(&SubmissionPayload::default(), true).await,
            Err(SubmissionError::RequestCouldNotBeBuilt)
        );
    }

    #[test]
    fn test_debug_reports_overrides() {
        let mut client = FakeClient::new();
        client.set_on_get_tan(|_, _| Ok("tan".to_string()));

        let debug = format!("{client:?}");
        assert!(debug.contains("on_get_tan: true"));
        assert!(debug.contains("on_get_test_result: false"));
    }
}
