use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Refuses requests once the sentinel reports the pool unusable.
///
/// Sits in front of every route that touches the database, so a faulted pool
/// is never handed to a handler.
pub async fn pool_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.sentinel.is_unusable() {
        return AppError::PoolUnusable.into_response();
    }
    next.run(request).await
}
