//! Bulk transfer endpoints: menu import and order export.
//!
//! Both sides work in parsed rows; the spreadsheet file encoding belongs to
//! whatever tool sits in front of these routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_auth::Session;
use storefront_menu::{ImportMode, MenuRow};
use storefront_orders::export_rows;

use crate::app::routes::common::require_admin;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/export/orders", get(export_orders))
        .route("/import/menu", post(import_menu))
}

/// Flattened order rows, line items embedded as one serialized string cell.
pub async fn export_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    let rows = export_rows(&services.orders.list());
    (StatusCode::OK, Json(rows)).into_response()
}

/// Bulk menu load. `?mode=append` keeps the current menu and skips existing
/// ids; the default replaces the menu wholesale.
pub async fn import_menu(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
    Query(query): Query<dto::ImportQuery>,
    Json(rows): Json<Vec<MenuRow>>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    let mode = query.mode.unwrap_or(ImportMode::Replace);
    match services.menu.import(rows, mode) {
        Ok(count) => (
            StatusCode::OK,
            Json(serde_json::json!({ "ok": true, "count": count })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
