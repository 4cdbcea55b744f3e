use crate::error::user_proxy::UserProxyError;

use common::HttpStatusCode;

/// Translate a user service status code into the call's outcome.
///
/// `201 Created` is the only success. `403` and `409` are the domain errors
/// callers branch on; every other code is surfaced as
/// [`UserProxyError::UnexpectedStatus`] rather than passed off as success.
#[track_caller]
pub fn map_status(status: HttpStatusCode) -> Result<(), UserProxyError> {
    match status {
        HttpStatusCode::CREATED => Ok(()),
        HttpStatusCode::FORBIDDEN => Err(UserProxyError::forbidden()),
        HttpStatusCode::CONFLICT => Err(UserProxyError::user_exists()),
        other => Err(UserProxyError::unexpected_status(other)),
    }
}
