use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;
use storefront_infra::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        // An identifier that cannot exist is treated the same as one that does not.
        DomainError::InvalidId(_) | DomainError::NotFound => not_found(),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!("store operation failed: {err}");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        "database operation failed",
    )
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
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
