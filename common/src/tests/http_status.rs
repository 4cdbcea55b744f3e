use crate::HttpStatusCode;

/// **VALUE**: The named constants match the codes the user service speaks.
///
/// **BUG THIS CATCHES**: A typo in `CREATED`/`FORBIDDEN`/`CONFLICT` would silently
/// reroute every status mapping.
#[test]
fn given_named_constants_when_compared_then_match_numeric_codes() {
    assert_eq!(HttpStatusCode::CREATED.as_u16(), 201);
    assert_eq!(HttpStatusCode::FORBIDDEN.as_u16(), 403);
    assert_eq!(HttpStatusCode::CONFLICT.as_u16(), 409);
    assert_eq!(HttpStatusCode::from(201), HttpStatusCode::CREATED);
}

#[test]
fn given_status_codes_when_categorized_then_ranges_are_respected() {
    assert!(HttpStatusCode(201).is_created());
    assert!(!HttpStatusCode(200).is_created());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_status_code_when_displayed_then_prints_number_only() {
    assert_eq!(HttpStatusCode(418).to_string(), "418");
}
