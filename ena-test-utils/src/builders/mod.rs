//! Builders for test data

mod test_data;

pub use test_data::{PackageBuilder, SubmissionPayloadBuilder, sample_key};
