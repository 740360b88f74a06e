//! Tests for CLI configuration loading.
#![cfg(feature = "cli")]

use std::io::Write;
use std::time::Duration;

use breedfetch::BreedFetchError;
use breedfetch::config::Config;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn explicit_file_is_loaded() {
    let file = write_config(
        r#"
[api]
base_url = "http://localhost:8080"
timeout_secs = 5
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.timeout(), Duration::from_secs(5));
}

#[test]
fn partial_file_keeps_defaults() {
    let file = write_config("[api]\ntimeout_secs = 10\n");

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.api.base_url, "https://dog.ceo");
    assert_eq!(config.api.timeout_secs, 10);
}

#[test]
fn missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = Config::load(Some(&path)).unwrap_err();

    assert!(matches!(err, BreedFetchError::Configuration(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn invalid_toml_is_error() {
    let file = write_config("[api\nbase_url = ");

    let err = Config::load(Some(file.path())).unwrap_err();

    assert!(matches!(err, BreedFetchError::Configuration(_)));
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn client_uses_configured_base_url() {
    let config = Config::parse("[api]\nbase_url = \"http://localhost:9999\"\n").unwrap();
    assert_eq!(config.api.client().base_url(), "http://localhost:9999");
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://dog.ceo");
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
}
