use axum::{routing::get, Router};

pub mod common;
pub mod event_stream;
pub mod menu;
pub mod orders;
pub mod session;
pub mod system;
pub mod transfer;

/// Full route tree. Admin gating happens inside the handlers via
/// [`common::require_admin`]; the only unauthenticated mutation is order
/// submission.
pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(system::health))
        .nest("/api/admin", session::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(event_stream::router())
        .merge(transfer::router())
}
