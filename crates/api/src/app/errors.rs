use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpile_core::{DomainError, DomainResult};

/// Translate a domain error into the boundary's `{message, errors}` body.
///
/// Business failures (including "not found") surface as 400; only
/// concurrency contention gets 409.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation { field, reason } => {
            json_error(StatusCode::BAD_REQUEST, "Validation error", &field, reason)
        }
        DomainError::InvalidId(detail) => {
            json_error(StatusCode::BAD_REQUEST, "Validation error", "id", detail)
        }
        DomainError::NotFound(entity) => json_error(
            StatusCode::BAD_REQUEST,
            "Application error",
            "not found error",
            format!("{entity} not found"),
        ),
        DomainError::Duplicate(what) => json_error(
            StatusCode::BAD_REQUEST,
            "Application error",
            "Duplicate Error",
            format!("{what} already registered"),
        ),
        DomainError::OutOfStock => json_error(
            StatusCode::BAD_REQUEST,
            "Application error",
            "out of stock",
            "stock is out cannot perform withdrawal",
        ),
        DomainError::InsufficientStock => json_error(
            StatusCode::BAD_REQUEST,
            "Application error",
            "limited stock",
            "insufficient amount of stock",
        ),
        DomainError::Busy(what) | DomainError::Conflict(what) => {
            json_error(StatusCode::CONFLICT, "Application error", "conflict", what)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    message: &str,
    key: &str,
    detail: impl Into<String>,
) -> axum::response::Response {
    let mut errors = serde_json::Map::new();
    errors.insert(key.to_string(), serde_json::Value::String(detail.into()));

    (
        status,
        axum::Json(json!({
            "message": message,
            "errors": errors,
        })),
    )
        .into_response()
}

/// Prices arrive as signed JSON integers; the domain stores them unsigned.
pub fn non_negative_price(price: i64) -> DomainResult<u64> {
    u64::try_from(price)
        .map_err(|_| DomainError::validation("price", "must be positive or zero"))
}
