use crate::helpers::{
    TEST_EMAIL, TEST_PASSWORD, Unserializable, client_for, config_for, expect_no_requests,
    test_user,
};

use user_client::{UserProxy, UserProxyError, UserServiceClient};

use std::time::{Duration, Instant};

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A 201 from `POST /users` is success, and the request carries the
/// user as JSON.
///
/// **WHY THIS MATTERS**: This is the happy path of signup. If the body or
/// content type drift, the user service rejects every new account.
///
/// **BUG THIS CATCHES**: Would catch a wrong endpoint, missing content type,
/// or a redacted password in the body.
#[tokio::test]
async fn given_created_response_when_create_user_then_returns_ok_and_sends_json() {
    // GIVEN: A user service that accepts exactly our request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Creating the user
    let result = client_for(&server).create_user(&test_user()).await;

    // THEN: Should succeed
    assert!(result.is_ok(), "Expected Ok, got {result:?}");
}

#[tokio::test]
async fn given_forbidden_response_when_create_user_then_returns_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server).create_user(&test_user()).await;

    assert!(
        matches!(result, Err(UserProxyError::Forbidden { .. })),
        "Expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn given_conflict_response_when_create_user_then_returns_user_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let result = client_for(&server).create_user(&test_user()).await;

    assert!(
        matches!(result, Err(UserProxyError::UserExists { .. })),
        "Expected UserExists, got {result:?}"
    );
}

/// **VALUE**: A status outside 201/403/409 is reported, not treated as success.
///
/// **BUG THIS CATCHES**: Would catch a regression to "anything unmapped is fine",
/// which reports a crashed user service as a created account.
#[tokio::test]
async fn given_server_error_response_when_create_user_then_returns_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client_for(&server).create_user(&test_user()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, UserProxyError::UnexpectedStatus { .. }));
    assert_eq!(err.status_code(), Some(500));
}

/// **VALUE**: Unencodable input fails before any request is sent.
///
/// **BUG THIS CATCHES**: Would catch serialization being moved after the request
/// is built (e.g. into a lazily-encoded body), which would hit the network first.
#[tokio::test]
async fn given_unserializable_user_when_create_user_then_returns_serialization_error_without_request()
 {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let result = client_for(&server).create_user(&Unserializable).await;

    assert!(
        matches!(result, Err(UserProxyError::Serialization { .. })),
        "Expected Serialization error, got {result:?}"
    );
}

/// **VALUE**: An unresponsive user service can't block signup forever.
///
/// **WHY THIS MATTERS**: Callers sit on this future inside request handlers. Without
/// a timeout, one hung user service stalls every signup.
///
/// **BUG THIS CATCHES**: Would catch the timeout being dropped from the client builder.
#[tokio::test]
async fn given_slow_server_when_create_user_then_times_out_within_configured_limit() {
    // GIVEN: A server that takes far longer than the client will wait
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;
    let client = UserServiceClient::new(&config_for(&server, Duration::from_secs(1))).unwrap();

    // WHEN: Creating the user
    let started = Instant::now();
    let result = client.create_user(&test_user()).await;
    let elapsed = started.elapsed();

    // THEN: Should fail with a timeout, close to the configured second
    let err = result.unwrap_err();
    assert!(err.is_timeout(), "Expected timeout, got {err:?}");
    assert_eq!(err.error_category(), "timeout");
    assert!(elapsed < Duration::from_secs(5), "Took {elapsed:?}");
}

/// **VALUE**: A sub-second timeout still lets a fast service answer.
///
/// **BUG THIS CATCHES**: Would catch the timeout being truncated to zero, which
/// fails every request instantly no matter how quick the service is.
#[tokio::test]
async fn given_sub_second_timeout_and_fast_server_when_create_user_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_millis(50)))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(&server, Duration::from_millis(500));
    let client = UserServiceClient::new(&config).unwrap();

    let result = client.create_user(&test_user()).await;

    assert!(result.is_ok(), "Expected Ok, got {result:?}");
}

#[tokio::test]
async fn given_nothing_listening_when_create_user_then_returns_transport_error() {
    let client = UserServiceClient::from_parts("127.0.0.1", 1).unwrap();

    let result = client.create_user(&test_user()).await;

    assert!(
        matches!(result, Err(UserProxyError::Http { .. })),
        "Expected Http error, got {result:?}"
    );
}

/// **VALUE**: The `UserProxy` trait routes to the same HTTP call.
#[tokio::test]
async fn given_client_as_user_proxy_when_create_user_then_hits_users_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = client_for(&server);
    let result = UserProxy::create_user(&proxy, &test_user()).await;

    assert!(result.is_ok());
}

/// **VALUE**: One client can be cloned across tasks and used concurrently.
///
/// **BUG THIS CATCHES**: Would catch the client growing per-call mutable state
/// or losing its `Send`/`Clone` bounds.
#[tokio::test]
async fn given_cloned_client_when_used_from_many_tasks_then_every_call_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(8)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.create_user(&test_user()).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
