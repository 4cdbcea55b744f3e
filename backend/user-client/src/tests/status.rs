// Unit tests for the status-code mapping shared by both user service calls

use crate::error::user_proxy::UserProxyError;
use crate::user_proxy::map_status;

use common::HttpStatusCode;

/// **VALUE**: `201 Created` is success.
///
/// **BUG THIS CATCHES**: Would catch the success check drifting to `is_success()`,
/// which would also accept codes the user service never sends on success.
#[test]
fn given_created_when_mapped_then_returns_ok() {
    assert!(map_status(HttpStatusCode::CREATED).is_ok());
}

/// **VALUE**: The two domain errors callers branch on come out as typed variants.
///
/// **WHY THIS MATTERS**: Signup flows show "email already registered" on 409 and
/// "not allowed" on 403. If these collapse into a generic error, that UX breaks.
#[test]
fn given_forbidden_and_conflict_when_mapped_then_returns_domain_errors() {
    assert!(matches!(
        map_status(HttpStatusCode(403)),
        Err(UserProxyError::Forbidden { .. })
    ));
    assert!(matches!(
        map_status(HttpStatusCode(409)),
        Err(UserProxyError::UserExists { .. })
    ));
}

/// **VALUE**: Any other code is an error carrying the code, never a silent success.
///
/// **BUG THIS CATCHES**: Would catch a catch-all arm returning `Ok(())`, which would
/// report a 500 from the user service as a created user.
#[test]
fn given_unmapped_codes_when_mapped_then_returns_unexpected_status() {
    for code in [200, 202, 204, 301, 400, 401, 404, 422, 500, 502, 503] {
        match map_status(HttpStatusCode(code)) {
            Err(UserProxyError::UnexpectedStatus { status_code, .. }) => {
                assert_eq!(status_code.as_u16(), code);
            }
            other => panic!("HTTP {code} should be UnexpectedStatus, got {other:?}"),
        }
    }
}

/// **VALUE**: The mapping is a pure function of the code.
#[test]
fn given_same_code_twice_when_mapped_then_results_agree() {
    for code in [201, 403, 409, 418] {
        let first = map_status(HttpStatusCode(code)).err().map(|e| e.error_category());
        let second = map_status(HttpStatusCode(code)).err().map(|e| e.error_category());
        assert_eq!(first, second, "HTTP {code} mapped inconsistently");
    }
}
