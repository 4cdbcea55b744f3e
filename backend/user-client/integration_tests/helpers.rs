//! Test helpers for driving `UserServiceClient` against a wiremock server.

use user_client::{UserServiceClient, UserServiceConfig};

use models::User;

use std::time::Duration;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_EMAIL: &str = "ada@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";

/// Config pointing at `server` with the given timeout.
pub fn config_for(server: &MockServer, timeout: Duration) -> UserServiceConfig {
    let address = server.address();
    UserServiceConfig::new(address.ip().to_string(), address.port()).with_timeout(timeout)
}

/// Client pointing at `server` with the default ten-second timeout.
pub fn client_for(server: &MockServer) -> UserServiceClient {
    let address = server.address();
    UserServiceClient::from_parts(&address.ip().to_string(), address.port())
        .expect("Failed to build client")
}

pub fn test_user() -> User {
    User::new(TEST_EMAIL, TEST_PASSWORD)
}

/// Mount a mock that fails the test if any request reaches the server.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// A value whose `Serialize` impl always fails.
pub struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom("refuses to serialize"))
    }
}
