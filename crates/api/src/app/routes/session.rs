//! Admin login/logout and session introspection.
//!
//! Credentials come from configuration; the issued token is the opaque
//! session record every other route reads. Logout is trivial with stateless
//! tokens but kept for client parity.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, Utc};

use storefront_auth::{Role, Session, SessionClaims};

use crate::app::{dto, errors};
use crate::middleware::SessionState;

/// Admin session lifetime.
const SESSION_TTL_HOURS: i64 = 12;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

pub async fn login(
    Extension(state): Extension<SessionState>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if body.username != state.admin_user || body.password != state.admin_pass {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", "Invalid credentials");
    }

    let now = Utc::now();
    let claims = SessionClaims {
        sub: "1".to_string(),
        name: "Administrator".to_string(),
        role: Role::ADMIN,
        iat: now.timestamp(),
        exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
    };

    match state.issue_token(&claims) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({ "ok": true, "token": token })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to sign session token");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "could not issue session",
            )
        }
    }
}

pub async fn logout() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response()
}

pub async fn me(Extension(session): Extension<Session>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "ok": true, "user": session.user() })),
    )
        .into_response()
}
