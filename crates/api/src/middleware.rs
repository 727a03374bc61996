//! Session extraction middleware.
//!
//! Decodes the bearer session token (HS256, via the opaque token library)
//! and attaches a [`Session`] to every request. Unlike a hard auth wall,
//! this always proceeds: customers submit orders anonymously, so a missing
//! or invalid token simply yields an anonymous session and the per-route
//! admin gate does the rejecting.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use storefront_auth::{validate_claims, Session, SessionClaims};

use crate::config::ApiConfig;

/// Signing/verification keys plus the configured admin credential.
#[derive(Clone)]
pub struct SessionState {
    keys: Arc<SessionKeys>,
    pub admin_user: String,
    pub admin_pass: String,
}

struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionState {
    pub fn new(config: &ApiConfig) -> Self {
        let secret = config.session_secret.as_bytes();
        Self {
            keys: Arc::new(SessionKeys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            admin_user: config.admin_user.clone(),
            admin_pass: config.admin_pass.clone(),
        }
    }

    /// Issue a signed session token for the given claims.
    pub fn issue_token(&self, claims: &SessionClaims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &self.keys.encoding,
        )
    }

    /// Decode and validate a session token into a session.
    fn decode_session(&self, token: &str) -> Option<Session> {
        let data = jsonwebtoken::decode::<SessionClaims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .ok()?;
        validate_claims(&data.claims, Utc::now()).ok()?;
        Some(Session::authenticated(data.claims.into()))
    }
}

pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let session = bearer_token(req.headers())
        .and_then(|token| state.decode_session(token))
        .unwrap_or_else(Session::anonymous);

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
