use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use restock_infra::reorder::ReorderError;

pub fn reorder_error_to_response(err: ReorderError) -> axum::response::Response {
    match err {
        ReorderError::Stock(ref source) | ReorderError::Directory(ref source) => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "store_unavailable",
            format!("{err}: {source}"),
        ),
        ReorderError::Dispatch {
            ref failure,
            ref notified,
        } => (
            StatusCode::BAD_GATEWAY,
            axum::Json(json!({
                "error": failure.code(),
                "message": err.to_string(),
                "supplier": failure.supplier(),
                "notified": notified,
            })),
        )
            .into_response(),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
