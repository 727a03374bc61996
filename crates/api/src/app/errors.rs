use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::StoreError;

/// Map a store outcome to its HTTP rejection.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Unauthorized => unauthorized(),
        StoreError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        StoreError::InvalidInput(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", msg)
        }
    }
}

pub fn unauthorized() -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "ok": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
