use sqlx::PgPool;

use crate::db::PoolSentinel;

/// Shared application state
///
/// Built once in `main` and injected into the router. Clones are shallow:
/// every handler sees the same pool and the same sentinel.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub sentinel: PoolSentinel,
}

impl AppState {
    pub fn new(pool: PgPool, sentinel: PoolSentinel) -> Self {
        Self { pool, sentinel }
    }
}
