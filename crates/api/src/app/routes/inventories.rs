use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockpile_core::{InventoryId, ItemId};
use stockpile_ledger::InventoryPatch;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_inventory).get(list_inventories))
        .route(
            "/:id",
            get(get_inventory).put(update_inventory).delete(delete_inventory),
        )
}

fn parse_id(id: &str) -> Result<InventoryId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            "id",
            "invalid inventory id",
        )
    })
}

pub async fn create_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateInventoryRequest>,
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

    match services.inventories.create(item_id, body.stock, Utc::now()) {
        Ok(inventory) => (
            StatusCode::CREATED,
            Json(dto::GenericResponse::with_data(
                "Inventory created successfully",
                inventory,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.inventories.find_by_id(id) {
        Ok(inventory) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "Inventory retrieved successfully",
                inventory,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_inventories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.inventories.find_all(params.into()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "All inventories retrieved successfully",
                page,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateInventoryRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    let patch = InventoryPatch { stock: body.stock };
    match services.inventories.update(id, patch) {
        Ok(_) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Inventory updated successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.inventories.delete(id, Utc::now()) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Inventory deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
