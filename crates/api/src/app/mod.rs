//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: adapter selection (store, delivery provider) and the notifier
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/replenishment", routes::replenishment::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
