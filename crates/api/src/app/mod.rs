pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use services::AppServices;

/// Assemble the full router over a fresh in-memory service stack.
pub fn build_app() -> Router {
    build_app_with(Arc::new(AppServices::in_memory()))
}

pub fn build_app_with(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/items", routes::items::router())
        .nest("/inventories", routes::inventories::router())
        .nest("/inventory-transaction", routes::transactions::router())
        .nest("/orders", routes::orders::router())
        .route("/healthz", get(routes::system::health))
        .layer(Extension(services))
}
