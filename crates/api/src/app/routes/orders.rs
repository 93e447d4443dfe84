use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockpile_core::{ItemId, OrderId};
use stockpile_orders::OrderPatch;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

fn parse_id(id: &str) -> Result<OrderId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            "id",
            "invalid order id",
        )
    })
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateOrderRequest>,
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

    match services.orders.place(item_id, body.qty, Utc::now()).await {
        Ok(order) => (
            StatusCode::CREATED,
            Json(dto::GenericResponse::with_data(
                "Order created successfully",
                order,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.orders.find_by_id(id) {
        Ok(order) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "Order retrieved successfully",
                order,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.orders.find_all(params.into()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "All orders retrieved successfully",
                page,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateOrderRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    let patch = OrderPatch { qty: body.qty };
    match services.orders.update(id, patch) {
        Ok(_) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Order updated successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.orders.delete(id, Utc::now()) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Order deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
