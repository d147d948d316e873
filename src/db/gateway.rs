//! Statement gateway: parameterized execution with classified failures
//!
//! Every operation takes the executor explicitly. Handing it the pool runs
//! the statement on a fresh connection, acquired and released around that
//! one statement; handing it a transaction's connection makes the statement
//! join that transaction. Either way the driver error never escapes
//! unwrapped: failures come back as [`AppError::DataAccess`] carrying the
//! statement text.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Executor, Postgres, Row};

use crate::error::{AppError, AppResult};

/// A statement with its positional binds applied.
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Execute a query and map each row with the given row-to-entity function.
///
/// Never null: an empty `Vec` when no rows match. The binder is a pure
/// step: it only attaches positional binds, and encoding problems surface at
/// execution and are classified like any other driver failure.
pub async fn query<'q, T, E, B, M>(db: E, sql: &'q str, binder: B, mut mapper: M) -> AppResult<Vec<T>>
where
    E: Executor<'q, Database = Postgres>,
    B: FnOnce(PgQuery<'q>) -> PgQuery<'q>,
    M: for<'r> FnMut(&'r PgRow) -> Result<T, sqlx::Error>,
{
    let rows = binder(sqlx::query(sql))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::data_access(sql, e))?;

    rows.iter()
        .map(|row| mapper(row).map_err(|e| AppError::data_access(sql, e)))
        .collect()
}

/// Execute a query expecting at most one row.
///
/// For lookups by unique key. If the statement matches several rows only
/// the first is mapped and the rest are ignored; callers must ensure
/// uniqueness.
pub async fn query_one<'q, T, E, B, M>(
    db: E,
    sql: &'q str,
    binder: B,
    mut mapper: M,
) -> AppResult<Option<T>>
where
    E: Executor<'q, Database = Postgres>,
    B: FnOnce(PgQuery<'q>) -> PgQuery<'q>,
    M: for<'r> FnMut(&'r PgRow) -> Result<T, sqlx::Error>,
{
    let row = binder(sqlx::query(sql))
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::data_access(sql, e))?;

    match row {
        Some(row) => mapper(&row).map(Some).map_err(|e| AppError::data_access(sql, e)),
        None => Ok(None),
    }
}

/// Execute an INSERT/UPDATE/DELETE and return the affected-row count.
pub async fn execute<'q, E, B>(db: E, sql: &'q str, binder: B) -> AppResult<u64>
where
    E: Executor<'q, Database = Postgres>,
    B: FnOnce(PgQuery<'q>) -> PgQuery<'q>,
{
    let result = binder(sqlx::query(sql))
        .execute(db)
        .await
        .map_err(|e| AppError::data_access(sql, e))?;

    Ok(result.rows_affected())
}

/// Execute an INSERT with a `RETURNING id` clause and return the generated
/// key. Fails when the insert produces no row.
pub async fn insert_returning_id<'q, E, B>(db: E, sql: &'q str, binder: B) -> AppResult<i32>
where
    E: Executor<'q, Database = Postgres>,
    B: FnOnce(PgQuery<'q>) -> PgQuery<'q>,
{
    let row = binder(sqlx::query(sql))
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::data_access(sql, e))?;

    match row {
        Some(row) => row
            .try_get::<i32, _>(0)
            .map_err(|e| AppError::data_access(sql, e)),
        None => Err(AppError::no_rows(sql, "insert produced no generated id")),
    }
}
