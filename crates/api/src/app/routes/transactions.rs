use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockpile_core::{ItemId, TransactionId};
use stockpile_ledger::{TransactionPatch, TxnKind};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_transaction).get(list_transactions))
        .route(
            "/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

fn parse_id(id: &str) -> Result<TransactionId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            "id",
            "invalid transaction id",
        )
    })
}

pub async fn create_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTransactionRequest>,
) -> axum::response::Response {
    let item_id: ItemId = match body.item_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "Validation error",
                "item_id",
                "invalid item id",
            )
        }
    };
    let kind: TxnKind = match body.kind.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .transactions
        .record(item_id, body.qty, kind, Utc::now())
        .await
    {
        Ok(txn) => (
            StatusCode::CREATED,
            Json(dto::GenericResponse::with_data(
                "Transaction created successfully",
                txn,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.transactions.find_by_id(id) {
        Ok(txn) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "Inventory Transaction retrieved successfully",
                txn,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.transactions.find_all(params.into()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "All transaction retrieved successfully",
                page,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateTransactionRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };
    let kind = match body.kind.map(|k| k.parse::<TxnKind>()).transpose() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let patch = TransactionPatch {
        qty: body.qty,
        kind,
    };
    match services.transactions.update(id, patch) {
        Ok(_) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Transaction updated successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.transactions.delete(id, Utc::now()) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Transaction deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
