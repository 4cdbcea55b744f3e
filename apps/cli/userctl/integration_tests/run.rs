use userctl::cli::{Command, Credentials};
use userctl::commands::Outcome;
use userctl::error::UserCtlError;
use userctl::{load_config, run};

use user_client::UserProxyError;

use std::path::Path;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for config loading + user-client against a mock service
// ============================================================================

fn write_config(dir: &Path, server: &MockServer) -> std::path::PathBuf {
    let address = server.address();
    let config_path = dir.join("userctl.toml");
    std::fs::write(
        &config_path,
        format!(
            "hostname = \"{}\"\nport = {}\ntimeout_secs = 5\n",
            address.ip(),
            address.port()
        ),
    )
    .unwrap();
    config_path
}

fn credentials() -> Credentials {
    Credentials {
        email: "ada@example.com".to_string(),
        password: "s3cret".to_string(),
    }
}

/// **VALUE**: Config file → client → `POST /tokens` → printed token, end to end.
///
/// **WHY THIS MATTERS**: This is the whole binary minus argument parsing. A break
/// anywhere between config and output shows up here.
#[tokio::test]
async fn given_config_file_and_token_endpoint_when_run_then_returns_token() {
    // GIVEN: A user service issuing tokens and a config pointing at it
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "end-to-end"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&write_config(dir.path(), &server)).unwrap();

    // WHEN: Running create-token
    let outcome = run(&config, &Command::CreateToken(credentials()))
        .await
        .unwrap();

    // THEN: Should print the token
    assert!(matches!(outcome, Outcome::TokenIssued(_)));
    assert_eq!(outcome.to_string(), "end-to-end");
}

#[tokio::test]
async fn given_forbidden_service_when_create_user_run_then_surfaces_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&write_config(dir.path(), &server)).unwrap();

    let err = run(&config, &Command::CreateUser(credentials()))
        .await
        .unwrap_err();

    assert!(matches!(
        err.user_proxy_error(),
        Some(UserProxyError::Forbidden { .. })
    ));
}

/// **VALUE**: An invalid config is rejected before any client is built.
#[test]
fn given_config_with_zero_port_when_loaded_then_returns_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("userctl.toml");
    std::fs::write(&config_path, "hostname = \"users\"\nport = 0\n").unwrap();

    let result = load_config(&config_path);

    assert!(
        matches!(result, Err(UserCtlError::Client(_))),
        "Expected config error, got {result:?}"
    );
}
