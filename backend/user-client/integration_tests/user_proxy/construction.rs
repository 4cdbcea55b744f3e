use user_client::{UserProxyError, UserServiceClient, UserServiceConfig};

/// **VALUE**: The client targets `http://<host>:<port>` with no path prefix.
///
/// **BUG THIS CATCHES**: Would catch a path segment in the base URL, which would
/// make `join("users")` resolve somewhere other than `/users`.
#[test]
fn given_host_and_port_when_client_built_then_base_url_is_root_of_host() {
    let client = UserServiceClient::from_parts("users.internal", 8180).unwrap();

    assert_eq!(client.base_url().as_str(), "http://users.internal:8180/");
}

/// **VALUE**: Garbage hostnames fail at construction, before any request.
#[test]
fn given_invalid_hostname_when_client_built_then_returns_url_parse_error() {
    let result = UserServiceClient::new(&UserServiceConfig::new("bad host", 8180));

    assert!(
        matches!(result, Err(UserProxyError::UrlParse { .. })),
        "Expected UrlParse error, got {result:?}"
    );
}

/// **VALUE**: Construction is offline; nothing listens on the port yet it succeeds.
#[test]
fn given_unreachable_host_when_client_built_then_succeeds_without_network() {
    let result = UserServiceClient::from_parts("127.0.0.1", 1);

    assert!(result.is_ok());
}

/// **VALUE**: A config that fails validation never becomes a client.
///
/// **BUG THIS CATCHES**: Would catch `new` skipping `validate()`, which would
/// build a client with a zero timeout or one aimed at port 0.
#[test]
fn given_invalid_config_when_client_built_then_returns_config_error() {
    let zero_timeout = UserServiceConfig {
        timeout_secs: 0,
        ..UserServiceConfig::new("users.internal", 8180)
    };

    let cases = [
        UserServiceClient::new(&zero_timeout),
        UserServiceClient::from_parts("users.internal", 0),
        UserServiceClient::from_parts("", 8180),
    ];

    for result in cases {
        match result {
            Err(err @ UserProxyError::Config { .. }) => {
                assert_eq!(err.error_category(), "config");
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
