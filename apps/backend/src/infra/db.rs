use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use crate::config::db::{db_url, DbProfile, PoolSettings};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Per-connection session statements
fn session_statements(sqlite: bool) -> Vec<&'static str> {
    if sqlite {
        vec!["PRAGMA foreign_keys = ON;"]
    } else {
        vec![
            "SET application_name = 'touchline';",
            "SET timezone = 'UTC';",
        ]
    }
}

/// Connect without touching the schema.
pub async fn connect_db(
    profile: DbProfile,
    pool: PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    if url.starts_with("sqlite:") {
        return connect_sqlite(&url, profile, pool).await;
    }

    retry_connection(
        || connect_postgres(&url, pool),
        CONNECT_ATTEMPTS,
        CONNECT_INTERVAL_MS,
    )
    .await
}

async fn connect_sqlite(
    url: &str,
    profile: DbProfile,
    pool: PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    // Every pooled connection to ":memory:" is its own database, so the
    // in-memory profile pins exactly one connection for the pool's lifetime.
    let mut options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_millis(pool.acquire_timeout_ms));
    options = if profile.is_sqlite_memory() || url.contains(":memory:") {
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(pool.max_connections)
    };

    let sqlx_pool = options
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                for stmt in session_statements(true) {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite pool: {e}")))?;

    info!(engine = "sqlite", profile = ?profile, "pool=create");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(sqlx_pool))
}

async fn connect_postgres(url: &str, pool: PoolSettings) -> Result<DatabaseConnection, AppError> {
    let connect_opts = PgConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid Postgres connection options: {e}")))?;

    let sqlx_pool = PgPoolOptions::new()
        .max_connections(pool.max_connections)
        .acquire_timeout(Duration::from_millis(pool.acquire_timeout_ms))
        .idle_timeout(Duration::from_secs(30))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                for stmt in session_statements(false) {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::DbUnavailable {
            detail: format!("failed to connect to Postgres: {e}"),
        })?;

    info!(
        engine = "postgres",
        max = pool.max_connections,
        acquire_timeout_ms = pool.acquire_timeout_ms,
        "pool=create"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(sqlx_pool))
}

/// Single entrypoint used by the state builder: connect, then apply
/// pending migrations.
pub async fn bootstrap_db(
    profile: DbProfile,
    pool: PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, pool).await?;

    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;

    Ok(conn)
}
