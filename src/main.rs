use std::future::IntoFuture;

use catalog_api::config::Config;
use catalog_api::db;
use catalog_api::routes::create_router;
use catalog_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let sentinel = db::PoolSentinel::new();
    let pool = db::create_pool(&config, sentinel.clone()).await?;
    let state = AppState::new(pool.clone(), sentinel.clone());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "catalog API listening");

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        reason = sentinel.faulted() => {
            tracing::error!(%reason, "connection pool unusable, shutting down");
            pool.close().await;
            std::process::exit(1);
        }
    }

    Ok(())
}
