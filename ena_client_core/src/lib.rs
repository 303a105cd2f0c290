//! ENA Client Core Library
//!
//! Domain types, error kinds and the backend client interface of the
//! exposure notification app.

pub mod client;
pub mod configuration;
pub mod country;
pub mod error;
pub mod package;
pub mod submission;

// Fake implementations and testing utilities live in the ena-test-utils crate

// Re-export main types
pub use client::Client;
pub use configuration::{AppConfiguration, ExposureConfiguration};
pub use country::Country;
pub use error::{Error, RequestFailure, Result, SubmissionError, ValidationError};
pub use package::{DayId, DaysAndHours, DownloadedPackage, HourId};
pub use submission::{RegistrationKeyType, SubmissionPayload, TemporaryExposureKey, TestResult};
