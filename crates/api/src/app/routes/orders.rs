use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_auth::Session;
use storefront_events::OrderEvent;
use storefront_orders::OrderDraft;

use crate::app::routes::common::require_admin;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/confirm", post(confirm_order))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }
    (StatusCode::OK, Json(services.orders.list())).into_response()
}

/// Public: customers submit orders without being logged in.
///
/// Append first, then publish; a subscriber that registered before this call
/// sees the `created` event carrying the stored order.
pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<OrderDraft>,
) -> axum::response::Response {
    let order = services.orders.append(body);

    let payload = match serde_json::to_value(&order) {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(%err, order_id = %order.id, "order not serializable for event payload");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "event_error",
                "order stored but event payload failed",
            );
        }
    };
    services
        .events
        .publish(OrderEvent::created(payload, services.clock.now()));

    (
        StatusCode::OK,
        Json(serde_json::json!({ "ok": true, "id": order.id })),
    )
        .into_response()
}

/// Admin confirmation of a payment, relayed by the payment collaborator.
///
/// Publishes a `confirmed` event with a minimal payload; the order record
/// itself stays immutable.
pub async fn confirm_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
    Json(body): Json<dto::ConfirmPaymentRequest>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    if body.payment_key.is_empty() || body.order_id.is_empty() || body.amount == 0.0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_input",
            "paymentKey, orderId, amount required",
        );
    }

    let payload = serde_json::json!({
        "paymentKey": body.payment_key,
        "orderId": body.order_id,
        "amount": body.amount,
    });
    services
        .events
        .publish(OrderEvent::confirmed(payload, services.clock.now()));

    (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response()
}
