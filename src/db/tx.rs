//! Transaction coordinator

use std::future::Future;
use std::pin::Pin;

use sqlx::{PgConnection, PgPool};

use crate::error::{AppError, AppResult};

/// A transaction-scoped unit of work. It borrows the connection for its
/// whole duration, so every nested statement joins the same transaction.
pub type UnitOfWork<'c, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'c>>;

/// Runs units of work inside single transactions.
#[derive(Clone)]
pub struct Transactor {
    pool: PgPool,
}

impl Transactor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a unit of work inside one transaction.
    ///
    /// One connection is taken from the pool and `BEGIN` is issued; the
    /// unit receives that connection handle and must reuse it for every
    /// nested call. Opening another top-level transaction inside a unit is
    /// not supported. On success the transaction commits and the unit's
    /// value is returned. On any failure inside the unit the transaction is
    /// rolled back and the original error is re-raised wrapped in
    /// [`AppError::Transaction`]; a rollback failure is logged without
    /// masking that original error. The connection returns to the pool in
    /// its default state on every exit path; if neither commit nor
    /// rollback ran, sqlx rolls back on drop.
    pub async fn run_in_transaction<T, F>(&self, unit: F) -> AppResult<T>
    where
        F: for<'c> FnOnce(&'c mut PgConnection) -> UnitOfWork<'c, T>,
    {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::data_access("BEGIN", e))?;

        match unit(&mut *tx).await {
            Ok(value) => {
                tx.commit().await.map_err(|e| {
                    AppError::Transaction(Box::new(AppError::data_access("COMMIT", e)))
                })?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback failed after unit of work error");
                }
                Err(AppError::Transaction(Box::new(err)))
            }
        }
    }
}
