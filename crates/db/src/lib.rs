pub mod person;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

use rollcall_common::error::{RollcallError, RollcallResult};
use rollcall_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Build Postgres connect options from the `DB_*` settings. TLS is off.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::Disable)
}

/// Create a Postgres connection pool. Fails unless the first connection
/// can be established.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> RollcallResult<PgPool> {
    tracing::info!(
        host = options.get_host(),
        port = options.get_port(),
        max_connections,
        "connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| RollcallError::Database(e.to_string()))
}
