//! Test utilities for the ENA client
//!
//! This crate provides a configurable fake client, fixture loading, test
//! data builders and logging setup for testing code that depends on the
//! backend client interface.

pub mod builders;
pub mod fixtures;
pub mod logging;
pub mod mocks;

// Re-export commonly used types
pub use builders::{PackageBuilder, SubmissionPayloadBuilder};
pub use fixtures::{FakeClientConfig, FixtureError, FixtureLoader};
pub use logging::init_test_logging;
pub use mocks::{FakeClient, FakeClientBuilder};
