use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use storefront_auth::Session;
use storefront_menu::{MenuItemDraft, MenuItemPatch};

use crate::app::routes::common::require_admin;
use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/menu", get(list_menu).post(create_item))
        .route("/menu/:id", put(update_item).delete(delete_item))
}

/// Public: customers browse the menu without a session.
pub async fn list_menu(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.menu.list())).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
    Json(body): Json<MenuItemDraft>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    match services.menu.create(body) {
        Ok(item) => (StatusCode::CREATED, Json(serde_json::json!({ "ok": true, "item": item })))
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(body): Json<MenuItemPatch>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    match services.menu.update(&id, body) {
        Ok(item) => (StatusCode::OK, Json(serde_json::json!({ "ok": true, "item": item })))
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    // Idempotent: deleting an absent id is fine.
    services.menu.delete(&id);
    (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response()
}
