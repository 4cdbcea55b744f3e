use crate::helpers::{
    TEST_EMAIL, TEST_PASSWORD, Unserializable, client_for, config_for, expect_no_requests,
    test_user,
};

use user_client::{UserProxy, UserProxyError, UserServiceClient};

use std::time::{Duration, Instant};

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A 201 with `{"token": ...}` yields that token.
///
/// **WHY THIS MATTERS**: This is login. The token is what every later request
/// authenticates with.
///
/// **BUG THIS CATCHES**: Would catch a wrong endpoint, wrong body, or the token
/// field not being read.
#[tokio::test]
async fn given_created_response_with_token_when_create_token_then_returns_token() {
    // GIVEN: A user service issuing a token for our credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "abc123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Requesting a token
    let token = client_for(&server).create_token(&test_user()).await.unwrap();

    // THEN: Should return the issued token
    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn given_forbidden_response_when_create_token_then_returns_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server).create_token(&test_user()).await;

    assert!(
        matches!(result, Err(UserProxyError::Forbidden { .. })),
        "Expected Forbidden, got {result:?}"
    );
}

/// **VALUE**: Error statuses short-circuit before the body is decoded.
///
/// **BUG THIS CATCHES**: Would catch decode running first, which would turn a
/// 409 with a JSON token-looking body into a success.
#[tokio::test]
async fn given_conflict_response_with_token_body_when_create_token_then_returns_user_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"token": "ignored"})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).create_token(&test_user()).await;

    assert!(
        matches!(result, Err(UserProxyError::UserExists { .. })),
        "Expected UserExists, got {result:?}"
    );
}

#[tokio::test]
async fn given_ok_instead_of_created_when_create_token_then_returns_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "abc123"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).create_token(&test_user()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, UserProxyError::UnexpectedStatus { .. }));
    assert_eq!(err.status_code(), Some(200));
}

/// **VALUE**: A 201 whose body isn't a token object is an error, not an empty token.
///
/// **WHY THIS MATTERS**: An empty token "succeeding" pushes the failure downstream
/// where it surfaces as a confusing 401 far from its cause.
///
/// **BUG THIS CATCHES**: Would catch decode failures being swallowed.
#[tokio::test]
async fn given_malformed_body_when_create_token_then_returns_decode_error() {
    let bodies = ["not json", r#"{"access_token":"abc123"}"#, r#"{"token":42}"#];

    for body in bodies {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens"))
            .respond_with(ResponseTemplate::new(201).set_body_string(body))
            .mount(&server)
            .await;

        let result = client_for(&server).create_token(&test_user()).await;

        assert!(
            matches!(result, Err(UserProxyError::Decode { .. })),
            "Body {body:?}: expected Decode error, got {result:?}"
        );
    }
}

#[tokio::test]
async fn given_unserializable_credentials_when_create_token_then_returns_serialization_error_without_request()
 {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let result = client_for(&server).create_token(&Unserializable).await;

    assert!(
        matches!(result, Err(UserProxyError::Serialization { .. })),
        "Expected Serialization error, got {result:?}"
    );
}

/// **VALUE**: Token creation is bounded by the same timeout as user creation.
///
/// **BUG THIS CATCHES**: Would catch a per-request client without a timeout being
/// used for `/tokens`, leaving login able to hang indefinitely.
#[tokio::test]
async fn given_slow_server_when_create_token_then_times_out_within_configured_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"token": "late"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;
    let client = UserServiceClient::new(&config_for(&server, Duration::from_secs(1))).unwrap();

    let started = Instant::now();
    let result = client.create_token(&test_user()).await;
    let elapsed = started.elapsed();

    let err = result.unwrap_err();
    assert!(err.is_timeout(), "Expected timeout, got {err:?}");
    assert!(elapsed < Duration::from_secs(5), "Took {elapsed:?}");
}

#[tokio::test]
async fn given_client_as_user_proxy_when_create_token_then_hits_tokens_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "via-trait"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = client_for(&server);
    let token = UserProxy::create_token(&proxy, &test_user()).await.unwrap();

    assert_eq!(token.as_str(), "via-trait");
}
