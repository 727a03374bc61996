//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout, one concern per file:
//! - `services.rs`: the store/broadcaster instances the process owns
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    let session_state = middleware::SessionState::new(config);

    Router::new().merge(routes::router()).layer(
        ServiceBuilder::new()
            .layer(Extension(services))
            .layer(Extension(session_state.clone()))
            .layer(axum::middleware::from_fn_with_state(
                session_state,
                middleware::session_middleware,
            )),
    )
}
