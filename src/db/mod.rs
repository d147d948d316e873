//! Database access: connection pool, statement gateway, transactions

pub mod gateway;
pub mod tx;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

pub use tx::{Transactor, UnitOfWork};

/// Embedded schema migrations, applied by the composition root (and the
/// integration tests) before first use.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create the database connection pool from configuration.
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
        .map_err(|e| AppError::Internal(format!("failed to connect to database: {}", e)))
}
