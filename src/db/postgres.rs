use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

use crate::config::Config;
use crate::db::PoolSentinel;

/// Creates the process-wide PostgreSQL connection pool
///
/// Connections are established from the discrete `DB_*` settings and reused
/// across requests, up to `db_pool_size` at a time. Each acquire pings the
/// connection first; a ping that fails on a connection that had been sitting
/// idle is reported to `sentinel` before the error reaches the caller.
pub async fn create_pool(config: &Config, sentinel: PoolSentinel) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_pool_size)
        .test_before_acquire(false)
        .before_acquire(move |conn, meta| {
            let sentinel = sentinel.clone();
            Box::pin(async move {
                if let Err(err) = conn.ping().await {
                    // A dead idle connection means the pool was holding a
                    // handle it believed was usable.
                    if !meta.idle_for.is_zero() {
                        sentinel.trip(&err);
                    }
                    return Err(err);
                }
                Ok(true)
            })
        })
        .connect_with(connect_options(config))
        .await?;

    Ok(pool)
}

/// Builds connection options from the `DB_*` configuration values.
pub fn connect_options(config: &Config) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_database)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        envy::from_iter::<_, Config>(vec![
            ("DB_USER".to_string(), "catalog".to_string()),
            ("DB_HOST".to_string(), "db.internal".to_string()),
            ("DB_DATABASE".to_string(), "catalog".to_string()),
            ("DB_PASSWORD".to_string(), "secret".to_string()),
            ("DB_PORT".to_string(), "5432".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_connect_options_carry_configured_values() {
        let options = connect_options(&config());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "catalog");
        assert_eq!(options.get_database(), Some("catalog"));
    }
}
