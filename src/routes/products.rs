use axum::{extract::State, Extension, Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{Dataset, DatasetSnapshot, Product};
use crate::state::AppState;

/// Handler for administrator-uploaded products
pub async fn uploaded(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price_cents, image_url, created_at \
         FROM products WHERE source = 'admin_upload' ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    tracing::debug!(count = products.len(), "fetched uploaded products");
    Ok(Json(products))
}

/// Handler for the home view selection
pub async fn home(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price_cents, image_url, created_at \
         FROM products WHERE placement = 'home' ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    tracing::debug!(count = products.len(), "fetched home products");
    Ok(Json(products))
}

/// Handler for the landing page selection
pub async fn landing_page(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price_cents, image_url, created_at \
         FROM products WHERE placement = 'landing' ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    tracing::debug!(count = products.len(), "fetched landing page products");
    Ok(Json(products))
}

/// Handler for the most recently imported dataset
pub async fn newest_dataset(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<DatasetSnapshot>> {
    let dataset = sqlx::query_as::<_, Dataset>(
        "SELECT id, label, imported_at FROM datasets ORDER BY imported_at DESC LIMIT 1",
    )
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("no dataset has been imported yet".to_string()))?;

    let products = dataset_products(&state.pool, dataset.id).await?;

    tracing::info!(
        request_id = %request_id,
        dataset = %dataset.id,
        count = products.len(),
        "serving newest dataset"
    );

    Ok(Json(DatasetSnapshot { dataset, products }))
}

async fn dataset_products(pool: &PgPool, dataset_id: Uuid) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price_cents, image_url, created_at \
         FROM products WHERE dataset_id = $1 ORDER BY created_at DESC",
    )
    .bind(dataset_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}
