use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockpile_catalog::ItemPatch;
use stockpile_core::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

fn parse_id(id: &str) -> Result<ItemId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            "id",
            "invalid item id",
        )
    })
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let price = match errors::non_negative_price(body.price) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.items.create(&body.name, price, Utc::now()) {
        Ok(item) => (
            StatusCode::CREATED,
            Json(dto::GenericResponse::with_data(
                "Item created successfully",
                item,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.items.find_by_id(id) {
        Ok(item) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "Item retrieved successfully",
                item,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.items.find_all(params.into()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::GenericResponse::with_data(
                "All items retrieved successfully",
                page,
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };
    let price = match body.price.map(errors::non_negative_price).transpose() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let patch = ItemPatch {
        name: body.name,
        price,
    };
    match services.items.update(id, patch) {
        Ok(_) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Item updated successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(r) => return r,
    };

    match services.items.delete(id, Utc::now()) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::GenericResponse::message_only(
                "Item deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
