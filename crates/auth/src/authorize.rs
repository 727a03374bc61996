use thiserror::Error;

use crate::Session;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unauthorized")]
    Unauthorized,
}

/// Gate a privileged operation on the caller's session.
///
/// Allowed iff a user is present and its role is exactly `admin`. An absent
/// session denies; there is no default-allow path.
///
/// - No IO
/// - No panics
/// - No side effects (pure predicate)
pub fn authorize(session: &Session) -> Result<(), AuthzError> {
    match session.role() {
        Some(role) if role.is_admin() => Ok(()),
        _ => Err(AuthzError::Unauthorized),
    }
}
