use crate::helpers::{TEST_PASSWORD, config_for};

use user_client::{UserProxyError, UserServiceClient};

use models::User;

use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROUNDS: usize = 10;

/// Mount a `/users` and `/tokens` answer for one email address.
async fn mount_answer(server: &MockServer, email: &str, template: ResponseTemplate) {
    for endpoint in ["/users", "/tokens"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_partial_json(serde_json::json!({ "email": email })))
            .respond_with(template.clone())
            .mount(server)
            .await;
    }
}

/// **VALUE**: One client survives many calls through every exit path: domain
/// errors, unexpected status, undecodable token bodies and success.
///
/// **WHY THIS MATTERS**: Error paths return before the body is read. If the
/// response weren't dropped on those paths, connections would pile up and a
/// long-lived client would eventually stall.
///
/// **BUG THIS CATCHES**: Would catch a response being kept alive past its call
/// (stored, leaked, or held by a guard), which shows up here as timeouts.
#[tokio::test]
async fn given_mixed_outcomes_when_called_repeatedly_on_one_client_then_every_call_completes() {
    // GIVEN: A service answering differently per user, always with a body
    let server = MockServer::start().await;
    let filler = "x".repeat(16 * 1024);
    mount_answer(
        &server,
        "forbidden@example.com",
        ResponseTemplate::new(403).set_body_string(filler.clone()),
    )
    .await;
    mount_answer(
        &server,
        "exists@example.com",
        ResponseTemplate::new(409).set_body_string(filler.clone()),
    )
    .await;
    mount_answer(
        &server,
        "broken@example.com",
        ResponseTemplate::new(500).set_body_string(filler.clone()),
    )
    .await;
    mount_answer(
        &server,
        "garbled@example.com",
        ResponseTemplate::new(201).set_body_string(filler),
    )
    .await;
    mount_answer(
        &server,
        "ok@example.com",
        ResponseTemplate::new(201).set_body_json(serde_json::json!({"token": "abc123"})),
    )
    .await;
    let client = UserServiceClient::new(&config_for(&server, Duration::from_secs(2))).unwrap();

    // WHEN/THEN: Cycling through every outcome on the same client
    for _ in 0..ROUNDS {
        let forbidden = User::new("forbidden@example.com", TEST_PASSWORD);
        let exists = User::new("exists@example.com", TEST_PASSWORD);
        let broken = User::new("broken@example.com", TEST_PASSWORD);
        let garbled = User::new("garbled@example.com", TEST_PASSWORD);
        let ok = User::new("ok@example.com", TEST_PASSWORD);

        assert!(matches!(
            client.create_user(&forbidden).await,
            Err(UserProxyError::Forbidden { .. })
        ));
        assert!(matches!(
            client.create_token(&exists).await,
            Err(UserProxyError::UserExists { .. })
        ));
        assert!(matches!(
            client.create_user(&broken).await,
            Err(UserProxyError::UnexpectedStatus { .. })
        ));
        assert!(matches!(
            client.create_token(&garbled).await,
            Err(UserProxyError::Decode { .. })
        ));
        assert!(client.create_user(&ok).await.is_ok());
        assert_eq!(client.create_token(&ok).await.unwrap().as_str(), "abc123");
    }

    // AND: Every call reached the service exactly once
    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), ROUNDS * 6);
}
