//! Fake implementations for testing

mod client;

pub use client::{
    AppConfigurationHandler, DEFAULT_COUNTRY_CODES, DUMMY_REGISTRATION_TOKEN, DUMMY_TAN,
    FakeClient, FakeClientBuilder, RegistrationTokenHandler, SubmitHandler,
    SupportedCountriesHandler, TanHandler, TestResultHandler, default_supported_countries,
};
