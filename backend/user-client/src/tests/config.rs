// Unit tests for UserServiceConfig loading, overrides and validation

use crate::config::{HOSTNAME_ENV, PORT_ENV, TIMEOUT_SECS_ENV, UserServiceConfig};
use crate::error::config::ConfigError;

use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn given_default_config_when_inspected_then_targets_localhost_with_ten_second_timeout() {
    let config = UserServiceConfig::default();

    assert_eq!(config.base_url(), "http://localhost:8180");
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert!(config.validate().is_ok());
}

/// **VALUE**: The base URL is exactly `http://<host>:<port>`.
///
/// **BUG THIS CATCHES**: Would catch a trailing slash or path prefix sneaking in,
/// which would turn `/users` into `//users` on some servers.
#[test]
fn given_host_and_port_when_base_url_rendered_then_has_no_path() {
    let config = UserServiceConfig::new("users.internal", 9090);

    assert_eq!(config.base_url(), "http://users.internal:9090");
}

#[test]
fn given_missing_file_when_loaded_then_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = UserServiceConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, UserServiceConfig::default());
}

#[test]
fn given_partial_toml_when_loaded_then_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userctl.toml");
    std::fs::write(&path, "hostname = \"users\"\nport = 8080\n").unwrap();

    let config = UserServiceConfig::load(&path).unwrap();

    assert_eq!(config.hostname, "users");
    assert_eq!(config.port, 8080);
    assert_eq!(config.timeout_secs, 10);
}

/// **VALUE**: A corrupt config file is reported, not silently replaced by defaults.
///
/// **BUG THIS CATCHES**: Would catch parse errors being swallowed, which would
/// point the client at localhost while the operator thinks it targets production.
#[test]
fn given_invalid_toml_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userctl.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let result = UserServiceConfig::load(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_env_overrides_when_applied_then_fields_are_replaced() {
    let lookup = lookup_from(&[
        (HOSTNAME_ENV, "users.svc"),
        (PORT_ENV, " 9000 "),
        (TIMEOUT_SECS_ENV, "3"),
    ]);

    let config = UserServiceConfig::default().apply_overrides(lookup).unwrap();

    assert_eq!(config.hostname, "users.svc");
    assert_eq!(config.port, 9000);
    assert_eq!(config.timeout(), Duration::from_secs(3));
}

#[test]
fn given_no_env_overrides_when_applied_then_config_is_unchanged() {
    let original = UserServiceConfig::new("users", 8080);

    let config = original.clone().apply_overrides(|_| None).unwrap();

    assert_eq!(config, original);
}

#[test]
fn given_unparseable_port_override_when_applied_then_returns_env_error() {
    let lookup = lookup_from(&[(PORT_ENV, "70000")]);

    let result = UserServiceConfig::default().apply_overrides(lookup);

    match result {
        Err(ConfigError::EnvOverride {
            variable, value, ..
        }) => {
            assert_eq!(variable, PORT_ENV);
            assert_eq!(value, "70000");
        }
        other => panic!("Expected EnvOverride error, got {other:?}"),
    }
}

#[test]
fn given_invalid_values_when_validated_then_returns_validation_error() {
    let cases = [
        UserServiceConfig::new("", 8180),
        UserServiceConfig::new("http://users", 8180),
        UserServiceConfig::new("users/api", 8180),
        UserServiceConfig::new("users", 0),
        UserServiceConfig::new("users", 8180).with_timeout(Duration::ZERO),
        UserServiceConfig::new("users", 8180).with_timeout(Duration::from_secs(301)),
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "Expected {config:?} to be rejected"
        );
    }
}

/// **VALUE**: Sub-second timeouts round up instead of collapsing to zero.
///
/// **WHY THIS MATTERS**: A zero timeout makes every request fail immediately,
/// even against a service answering in milliseconds.
///
/// **BUG THIS CATCHES**: Would catch `with_timeout` truncating with `as_secs()`.
#[test]
fn given_sub_second_timeout_when_set_then_rounds_up_to_whole_seconds() {
    let half = UserServiceConfig::default().with_timeout(Duration::from_millis(500));
    let one_and_half = UserServiceConfig::default().with_timeout(Duration::from_millis(1500));
    let exact = UserServiceConfig::default().with_timeout(Duration::from_secs(3));

    assert_eq!(half.timeout(), Duration::from_secs(1));
    assert_eq!(one_and_half.timeout(), Duration::from_secs(2));
    assert_eq!(exact.timeout(), Duration::from_secs(3));
    assert!(half.validate().is_ok());
}
