//! Unit tests for configuration

use super::super::config::*;
use super::super::error::AppError;
use log::LevelFilter;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.storage_key, "authCode");
    assert_eq!(config.login_delay_ms, 1000);
    assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn test_no_overrides_is_default() {
    let config = AppConfig::with_overrides(None, None, None).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_overrides_apply() {
    let config = AppConfig::with_overrides(Some("session"), Some(" 250 "), Some("debug")).unwrap();
    assert_eq!(config.storage_key, "session");
    assert_eq!(config.login_delay_ms, 250);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn test_empty_storage_key_is_rejected() {
    let err = AppConfig::with_overrides(Some("  "), None, None).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_bad_delay_is_rejected() {
    let err = AppConfig::with_overrides(None, Some("soon"), None).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_bad_level_is_rejected() {
    let err = AppConfig::with_overrides(None, None, Some("loud")).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
