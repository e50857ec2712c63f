use crate::config::*;
use serial_test::serial;
use std::env;
use std::time::Duration;

#[test]
fn test_build_mode_defaults() {
    assert_eq!(
        resolve_api_base(None, BuildMode::Development),
        "http://127.0.0.1:10000"
    );
    assert_eq!(resolve_api_base(None, BuildMode::Production), "/api");
}

#[test]
fn test_override_wins() {
    assert_eq!(
        resolve_api_base(Some("https://classifier.internal"), BuildMode::Production),
        "https://classifier.internal"
    );
}

#[test]
fn test_empty_override_falls_back() {
    assert_eq!(resolve_api_base(Some(""), BuildMode::Production), "/api");
    assert_eq!(
        resolve_api_base(Some("   "), BuildMode::Development),
        DEV_API_BASE
    );
}

#[test]
fn test_trailing_slashes_trimmed() {
    assert_eq!(
        resolve_api_base(Some("http://localhost:10000//"), BuildMode::Development),
        "http://localhost:10000"
    );
    assert_eq!(resolve_api_base(Some("/"), BuildMode::Production), "");
}

#[test]
fn test_endpoint_urls() {
    let config = ClientConfig::default().with_api_base(Some("http://host:1/"));
    assert_eq!(config.health_url(), "http://host:1/health");
    assert_eq!(config.predict_url(), "http://host:1/predict");

    let relative = ClientConfig {
        api_base: resolve_api_base(None, BuildMode::Production),
        ..ClientConfig::default()
    };
    assert_eq!(relative.predict_url(), "/api/predict");
}

#[test]
fn test_default_intervals() {
    let config = ClientConfig::default();
    assert_eq!(config.health_interval, Duration::from_millis(10_000));
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn test_builder_overrides() {
    let config = ClientConfig::default()
        .with_request_timeout(Duration::from_secs(2))
        .with_health_interval(Duration::from_millis(250));
    assert_eq!(config.request_timeout, Duration::from_secs(2));
    assert_eq!(config.health_interval, Duration::from_millis(250));
}

#[test]
fn test_health_timeout_never_exceeds_interval() {
    let config = ClientConfig::default();
    assert_eq!(config.health_timeout(), HEALTH_INTERVAL);

    let fast = ClientConfig::default().with_request_timeout(Duration::from_secs(2));
    assert_eq!(fast.health_timeout(), Duration::from_secs(2));
}

#[test]
fn test_with_api_base_none_keeps_current() {
    let config = ClientConfig::default().with_api_base(None);
    assert_eq!(config.api_base, DEV_API_BASE);
}

#[test]
#[serial]
fn test_from_env_respects_env_var() {
    unsafe {
        env::set_var(API_URL_ENV, "http://env-host:9000/");
    }

    let config = ClientConfig::from_env();
    assert_eq!(config.api_base, "http://env-host:9000");

    unsafe {
        env::remove_var(API_URL_ENV);
    }
}

#[test]
#[serial]
fn test_flag_overrides_env_var() {
    // Precedence: CLI flag > env var > default
    unsafe {
        env::set_var(API_URL_ENV, "http://env-host:9000");
    }

    let config = ClientConfig::from_env().with_api_base(Some("http://flag-host:7000"));
    assert_eq!(config.api_base, "http://flag-host:7000");

    unsafe {
        env::remove_var(API_URL_ENV);
    }
}

#[test]
#[serial]
fn test_from_env_without_var_uses_dev_default() {
    unsafe {
        env::remove_var(API_URL_ENV);
    }
    assert_eq!(ClientConfig::from_env().api_base, DEV_API_BASE);
}
