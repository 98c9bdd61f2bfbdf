//! Unit tests for config module
//!
//! Tests configuration defaults, TOML parsing and file loading.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::config::{
    ConfigError, DEFAULT_NEXT_STATION_KEY, DEFAULT_PREVIOUS_STATION_KEY, DEFAULT_VOLUME_DOWN_KEY,
    DEFAULT_VOLUME_UP_KEY, MediaKeysConfig,
};

#[test]
fn config_default() {
    let config = MediaKeysConfig::default();

    assert!(config.key_mapping);
    assert_eq!(config.volume_up_key, DEFAULT_VOLUME_UP_KEY);
    assert_eq!(config.volume_down_key, DEFAULT_VOLUME_DOWN_KEY);
    assert_eq!(config.next_station_key, DEFAULT_NEXT_STATION_KEY);
    assert_eq!(config.previous_station_key, DEFAULT_PREVIOUS_STATION_KEY);
    assert_eq!(config.use_legacy_service_name, None);
}

#[test]
fn config_empty_toml_uses_defaults() {
    let config: MediaKeysConfig = toml::from_str("").unwrap();

    assert!(config.key_mapping);
    assert_eq!(config.volume_up_key, DEFAULT_VOLUME_UP_KEY);
    assert_eq!(config.use_legacy_service_name, None);
}

#[test]
fn config_partial_toml_keeps_other_defaults() {
    let toml_str = r#"
        key_mapping = false
        volume_up_key = "MyVolumeUp"
    "#;

    let config: MediaKeysConfig = toml::from_str(toml_str).unwrap();

    assert!(!config.key_mapping);
    assert_eq!(config.volume_up_key, "MyVolumeUp");
    assert_eq!(config.volume_down_key, DEFAULT_VOLUME_DOWN_KEY);
    assert_eq!(config.next_station_key, DEFAULT_NEXT_STATION_KEY);
}

#[test]
fn legacy_service_name_presence_is_preserved() {
    let absent: MediaKeysConfig = toml::from_str("").unwrap();
    assert_eq!(absent.use_legacy_service_name, None);

    let enabled: MediaKeysConfig = toml::from_str("use_legacy_service_name = true").unwrap();
    assert_eq!(enabled.use_legacy_service_name, Some(true));

    let disabled: MediaKeysConfig = toml::from_str("use_legacy_service_name = false").unwrap();
    assert_eq!(disabled.use_legacy_service_name, Some(false));
}

#[test]
fn config_serialize_roundtrip() {
    let original = MediaKeysConfig {
        key_mapping: false,
        use_legacy_service_name: Some(true),
        ..MediaKeysConfig::default()
    };

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: MediaKeysConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(format!("{original:?}"), format!("{deserialized:?}"));
}

#[test]
fn load_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mediakeys.toml");
    fs::write(
        &config_path,
        r#"
            next_station_key = "XF86Forward"
            use_legacy_service_name = true
        "#,
    )
    .unwrap();

    let config = MediaKeysConfig::load(&config_path).unwrap();

    assert_eq!(config.next_station_key, "XF86Forward");
    assert_eq!(config.use_legacy_service_name, Some(true));
    assert!(config.key_mapping);
}

#[test]
fn load_missing_file_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist.toml");

    let result = MediaKeysConfig::load(&missing);

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn load_invalid_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "key_mapping = maybe").unwrap();

    let result = MediaKeysConfig::load(&config_path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
