use axum::{routing::get, Router};

pub mod cart;
pub mod catalog;
pub mod common;
pub mod listings;
pub mod predict;
pub mod products;
pub mod session;
pub mod system;

/// Router for all authenticated (session-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/session/current", axum::routing::delete(session::sign_out))
        .route("/catalog", get(catalog::browse))
        .nest("/listings", listings::router())
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .route("/predict", axum::routing::post(predict::predict))
}
