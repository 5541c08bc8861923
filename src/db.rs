//! Connection pool setup and the transaction helpers used by the usecases.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};

use crate::config::Config;
use crate::error::AppError;

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Opens the PostgreSQL pool, retrying while the database is not reachable yet.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let attempts = config.database_connect_retries.max(1);

    for attempt in 1..=attempts {
        let result = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .max_lifetime(Duration::from_secs(60 * 60))
            .idle_timeout(Duration::from_secs(10 * 60))
            .connect(&config.database_url)
            .await;

        match result {
            Ok(pool) => {
                log::info!("Connected to database");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                log::warn!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s",
                    attempt,
                    attempts,
                    e,
                    RETRY_DELAY.as_secs()
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                log::error!("Giving up on database after {} attempts: {}", attempts, e);
                return Err(e.into());
            }
        }
    }

    Err(AppError::DatabaseError(
        "Failed to connect to database, check the database configuration".into(),
    ))
}

/// Applies the embedded migrations from `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Starts a read-write transaction. Dropping it without `commit` rolls it back.
pub async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, AppError> {
    Ok(pool.begin().await?)
}

/// Starts a transaction that PostgreSQL will refuse to write through.
/// Callers never commit it; it is rolled back when dropped.
pub async fn begin_read_only(pool: &PgPool) -> Result<Transaction<'static, Postgres>, AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
