//! Live order feed for administrative dashboards.
//!
//! Server-Sent Events over the broadcaster: the subscription registers when
//! the request arrives and unregisters itself when the connection closes
//! (the subscription's drop side). Events published while nobody is
//! connected are simply lost; late dashboards never see history.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    response::{
        sse::{Event as SseEvent, KeepAlive, Sse},
        IntoResponse,
    },
    routing::get,
    Router,
};
use tokio_stream::StreamExt;

use storefront_auth::Session;

use crate::app::routes::common::require_admin;
use crate::app::services::AppServices;

const KEEP_ALIVE_SECS: u64 = 15;

pub fn router() -> Router {
    Router::new().route("/events/orders", get(stream_orders))
}

/// GET /events/orders — admin-only SSE stream.
///
/// Each event goes out under its kind as the SSE event name with the full
/// JSON event as data, matching what the dashboard's `EventSource` handlers
/// key on.
pub async fn stream_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<Session>,
) -> axum::response::Response {
    if let Err(rejection) = require_admin(&session) {
        return rejection;
    }

    let subscription = services.events.subscribe();
    tracing::debug!(subscribers = services.events.subscriber_count(), "dashboard subscribed");

    let stream = subscription.map(|evt| {
        let data = serde_json::to_string(&evt).unwrap_or_else(|_| "{}".to_string());
        Ok::<_, Infallible>(SseEvent::default().event(evt.kind.as_str()).data(data))
    });

    Sse::new(stream)
        .keep_alive(KeepAlive::new().interval(Duration::from_secs(KEEP_ALIVE_SECS)))
        .into_response()
}
