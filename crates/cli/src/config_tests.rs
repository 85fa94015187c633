// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_default_config_points_at_production_api() {
    let config = Config::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let state_dir = temp.path().join("nested").join("visite");
    let config = Config {
        base_url: "http://localhost:8080/API".to_string(),
        timeout_secs: Some(15),
    };
    config.save(&state_dir).unwrap();

    let loaded = Config::load(&state_dir).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.timeout(), Some(Duration::from_secs(15)));
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn test_config_load_or_default_without_file() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        Config::load_or_default(temp.path()).unwrap(),
        Config::default()
    );
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "timeout_secs = 5\n").unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, Some(5));
}

#[test]
fn test_config_invalid_toml() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "base_url = [").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[parameterized(
    https = { "https://example.org/API", true },
    http = { "http://localhost:8080", true },
    no_scheme = { "example.org/API", false },
    ftp = { "ftp://example.org", false },
    scheme_only = { "https://", false },
)]
fn test_config_validate_base_url(url: &str, valid: bool) {
    let config = Config {
        base_url: url.to_string(),
        timeout_secs: None,
    };
    assert_eq!(config.validate().is_ok(), valid);
}

#[test]
fn test_with_base_url_override() {
    let config = Config::default()
        .with_base_url(Some("http://127.0.0.1:9000/API/".to_string()))
        .unwrap();
    assert_eq!(config.api_root(), "http://127.0.0.1:9000/API");

    let unchanged = Config::default().with_base_url(None).unwrap();
    assert_eq!(unchanged, Config::default());

    assert!(Config::default()
        .with_base_url(Some("localhost".to_string()))
        .is_err());
}

#[test]
fn test_resolve_state_dir_prefers_explicit_path() {
    let dir = resolve_state_dir(Some(PathBuf::from("/tmp/visite-explicit"))).unwrap();
    assert_eq!(dir, PathBuf::from("/tmp/visite-explicit"));
}
