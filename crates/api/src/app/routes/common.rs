use storefront_auth::{authorize, Session};

use crate::app::errors;

/// Apply the admin gate to the request session.
///
/// The gate itself is the pure predicate in `storefront-auth`; this helper
/// only translates a denial into the 401 rejection.
pub fn require_admin(session: &Session) -> Result<(), axum::response::Response> {
    authorize(session).map_err(|_| errors::unauthorized())
}
