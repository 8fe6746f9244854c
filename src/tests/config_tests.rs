//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{ConfigLoader, LogConfig, StorageConfig, Validate, WordTrieConfig};
use crate::error::ConfigError;
use std::path::PathBuf;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordTrieConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.storage.directory, PathBuf::from("."));
    assert_eq!(config.storage.extension, "txt");
}

#[test_case("" ; "empty")]
#[test_case(".txt" ; "leading dot")]
#[test_case("a/b" ; "separator")]
fn test_invalid_extension(extension: &str) {
    let config = StorageConfig {
        extension: extension.to_string(),
        ..StorageConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_invalid_log_level() {
    let config = LogConfig {
        level: "loud".to_string(),
        ..LogConfig::default()
    };
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
    [storage]
    directory = "/srv/words"
    extension = "words"
    "#,
        )
        .unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.storage.directory, PathBuf::from("/srv/words"));
    assert_eq!(config.storage.extension, "words");

    // Other values should be defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
    [storage]
    extension = "words"

    [log]
    level = "warn"
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__STORAGE__EXTENSION", "lst");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.storage.extension, "lst");
    assert_eq!(config.log.level, "debug");
}

/// A missing file is reported as such rather than as a parse failure.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "invalid.toml",
            r#"
    [storage
    directory = words"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Values that parse but fail validation are rejected by the loader.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("bad_values.toml", "[storage]\nextension = \".txt\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_VALUES");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini", "[storage]\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_UNSUPPORTED");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// The generated default configuration round-trips through the loader.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&WordTrieConfig::default()).unwrap();
    let config_path = fixture.write_file("generated.toml", toml).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_GENERATED");
    assert_eq!(loader.load().unwrap(), WordTrieConfig::default());
}
