use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span, pool_guard, request_id};
use crate::state::AppState;

pub mod products;

/// Creates the application router with all routes
///
/// Registration is complete before the listener accepts traffic; nothing is
/// added or removed at runtime.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/products", product_routes(state))
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(axum::middleware::from_fn(request_id))
        .layer(CorsLayer::permissive())
}

/// Product routes under /api/products
fn product_routes(state: AppState) -> Router {
    Router::new()
        // .route("/", get(products::catalog))
        .route("/admin/uploaded", get(products::uploaded))
        .route("/home", get(products::home))
        .route("/admin/dataset", get(products::newest_dataset))
        .route("/root", get(products::landing_page))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            pool_guard,
        ))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
