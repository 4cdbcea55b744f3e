// Unit tests for command execution against a fake UserProxy

use crate::cli::{Command, Credentials};
use crate::commands::{Outcome, execute};
use crate::error::UserCtlError;

use models::{AuthToken, User};
use user_client::{UserProxy, UserProxyError};

use std::sync::Mutex;

/// Records every email it sees and answers from canned results.
struct FakeProxy {
    seen: Mutex<Vec<String>>,
    user_exists: bool,
    token: &'static str,
}

impl FakeProxy {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            user_exists: false,
            token: "fake-token",
        }
    }

    fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl UserProxy for FakeProxy {
    async fn create_user(&self, user: &User) -> Result<(), UserProxyError> {
        self.seen.lock().unwrap().push(user.email.clone());
        if self.user_exists {
            return Err(UserProxyError::user_exists());
        }
        Ok(())
    }

    async fn create_token(&self, user: &User) -> Result<AuthToken, UserProxyError> {
        self.seen.lock().unwrap().push(user.email.clone());
        Ok(AuthToken::new(self.token))
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn given_create_user_when_executed_then_proxy_receives_user() {
    let proxy = FakeProxy::new();
    let command = Command::CreateUser(credentials("ada@example.com", "s3cret"));

    let outcome = execute(&proxy, &command).await.unwrap();

    assert_eq!(proxy.calls(), vec!["ada@example.com".to_string()]);
    assert_eq!(outcome.to_string(), "created user ada@example.com");
}

/// **VALUE**: The token is printed raw so it can be piped into other tools.
#[tokio::test]
async fn given_create_token_when_executed_then_outcome_displays_raw_token() {
    let proxy = FakeProxy::new();
    let command = Command::CreateToken(credentials("ada@example.com", "s3cret"));

    let outcome = execute(&proxy, &command).await.unwrap();

    assert!(matches!(outcome, Outcome::TokenIssued(_)));
    assert_eq!(outcome.to_string(), "fake-token");
}

#[tokio::test]
async fn given_existing_user_when_create_user_executed_then_returns_user_exists() {
    let proxy = FakeProxy {
        user_exists: true,
        ..FakeProxy::new()
    };
    let command = Command::CreateUser(credentials("ada@example.com", "s3cret"));

    let err = execute(&proxy, &command).await.unwrap_err();

    assert!(matches!(
        err.user_proxy_error(),
        Some(UserProxyError::UserExists { .. })
    ));
}

/// **VALUE**: Invalid credentials never reach the proxy.
///
/// **BUG THIS CATCHES**: Would catch validation moving after the network call.
#[tokio::test]
async fn given_empty_password_when_executed_then_proxy_is_never_called() {
    let proxy = FakeProxy::new();
    let command = Command::CreateToken(credentials("ada@example.com", ""));

    let result = execute(&proxy, &command).await;

    assert!(matches!(result, Err(UserCtlError::Model(_))));
    assert!(proxy.calls().is_empty());
}
