//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared wiring (document store, sessions, carts, predictor)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        sessions: services.sessions.clone(),
    };

    // Protected routes: require a live session token.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/session", post(routes::session::sign_in))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
