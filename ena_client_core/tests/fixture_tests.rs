//! Tests for loading fake client fixtures from files and environment

use ena_client_core::{
    Client, DownloadedPackage, RequestFailure, SubmissionError, SubmissionPayload,
};
use ena_test_utils::fixtures::ENV_PREFIX;
use ena_test_utils::{FakeClient, FakeClientConfig, FixtureError, FixtureLoader};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = r#"
days = ["2020-06-01", "2020-06-02"]
hours = [5, 6]
supported_countries = ["de", "FR"]

[submission_error]
other = { message = "keys rejected" }

[package]
keys_bin = [1, 2, 3]
signature = [9]
"#;

fn write_fixture(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("fixture.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
#[serial]
async fn test_client_from_fixture_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, FIXTURE);

    let client = FixtureLoader::with_path(&path).load_client().unwrap();

    assert_eq!(
        client.available_days("DE").await.unwrap(),
        vec!["2020-06-01", "2020-06-02"]
    );
    assert_eq!(
        client.available_hours("2020-06-01", "DE").await.unwrap(),
        vec![5, 6]
    );
    assert_eq!(
        client.fetch_day("2020-06-01", "DE").await.unwrap(),
        DownloadedPackage::new(vec![1, 2, 3], vec![9])
    );

    let codes: Vec<String> = client
        .supported_countries()
        .await
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(codes, vec!["DE", "FR"]);

    let payload = SubmissionPayload::default();
    assert_eq!(
        client.submit(&payload, false).await,
        Err(SubmissionError::other("keys rejected"))
    );
}

#[tokio::test]
#[serial]
async fn test_missing_fixture_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let config = FixtureLoader::with_path(&path).load().unwrap();
    assert_eq!(config, FakeClientConfig::default());

    let client = FakeClient::from_config(config).unwrap();
    assert_eq!(client.supported_countries().await.unwrap().len(), 13);
}

#[test]
#[serial]
fn test_environment_overrides_fixture_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, FIXTURE);

    let key = format!("{ENV_PREFIX}REQUEST_FAILURE");
    // SAFETY: serialized with every other test touching the environment
    unsafe {
        std::env::set_var(&key, "no_network_connection");
    }
    let result = FixtureLoader::with_path(&path).load();
    unsafe {
        std::env::remove_var(&key);
    }

    let config = result.unwrap();
    assert_eq!(
        config.request_failure,
        Some(RequestFailure::NoNetworkConnection)
    );
    assert_eq!(config.hours, vec![5, 6]);
}

#[test]
#[serial]
fn test_malformed_fixture_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "hours = [300]");

    let result = FixtureLoader::with_path(&path).load();
    assert!(matches!(result, Err(FixtureError::Load(_))));
}
