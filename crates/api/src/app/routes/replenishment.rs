use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/notify", post(notify))
        .route("/preview", get(preview))
}

/// Run one notification pass. Body: the suppliers notified, in order.
pub async fn notify(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.notifier.run().await {
        Ok(notified) => (StatusCode::OK, Json(notified)).into_response(),
        Err(e) => {
            error!(code = e.code(), error = %e, "reorder notification run failed");
            errors::reorder_error_to_response(e)
        }
    }
}

/// What `notify` would send right now, without sending.
pub async fn preview(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.notifier.plan().await {
        Ok(planned) => (StatusCode::OK, Json(planned)).into_response(),
        Err(e) => errors::reorder_error_to_response(e),
    }
}
