use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Role, SessionUser};

/// Session token claims (transport-agnostic).
///
/// This is the minimal set of claims the storefront expects once a token has
/// been decoded/verified by whatever session library the transport uses.
/// Timestamps are epoch seconds, matching the usual JWT registered claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    pub sub: String,

    /// Display name of the user.
    pub name: String,

    /// Role granted to the session.
    pub role: Role,

    /// Issued-at (epoch seconds).
    pub iat: i64,

    /// Expiration (epoch seconds).
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is intentionally outside this crate.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

impl From<SessionClaims> for SessionUser {
    fn from(claims: SessionClaims) -> Self {
        SessionUser {
            id: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}
