// Unit tests for UserProxyError helpers and formatting

use crate::error::user_proxy::UserProxyError;

use common::HttpStatusCode;

/// **VALUE**: Errors name the failure and where it was raised.
///
/// **BUG THIS CATCHES**: Would catch the `{location}` placeholder being dropped
/// from a variant's message.
#[test]
fn given_domain_errors_when_formatted_then_include_label_and_location() {
    let forbidden = UserProxyError::forbidden().to_string();
    let exists = UserProxyError::user_exists().to_string();
    let unexpected = UserProxyError::unexpected_status(HttpStatusCode(502)).to_string();

    assert!(forbidden.contains("User Forbidden"));
    assert!(exists.contains("User Already Exists"));
    assert!(unexpected.contains("HTTP 502"));

    for message in [forbidden, exists, unexpected] {
        assert!(message.contains("user_proxy_error.rs"), "Missing location: {message}");
    }
}

#[test]
fn given_status_errors_when_status_code_queried_then_returns_code() {
    assert_eq!(UserProxyError::forbidden().status_code(), Some(403));
    assert_eq!(UserProxyError::user_exists().status_code(), Some(409));
    assert_eq!(
        UserProxyError::unexpected_status(HttpStatusCode(500)).status_code(),
        Some(500)
    );
}

#[test]
fn given_serialization_error_when_inspected_then_has_no_status_and_is_not_timeout() {
    let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
    let err = UserProxyError::serialization(&json_err);

    assert_eq!(err.status_code(), None);
    assert!(!err.is_timeout());
    assert_eq!(err.error_category(), "serialization");
}

#[test]
fn given_unexpected_status_when_categorized_then_separates_server_errors() {
    assert_eq!(
        UserProxyError::unexpected_status(HttpStatusCode(503)).error_category(),
        "server_error"
    );
    assert_eq!(
        UserProxyError::unexpected_status(HttpStatusCode(404)).error_category(),
        "unexpected_status"
    );
}

#[test]
fn given_url_parse_error_when_converted_then_becomes_url_parse_variant() {
    let parse_err = url::Url::parse("http://bad host:80").unwrap_err();

    let err = UserProxyError::from(parse_err);

    assert!(matches!(err, UserProxyError::UrlParse { .. }));
    assert_eq!(err.error_category(), "url_parse");
}
