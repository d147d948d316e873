//! Error types for the Novabook lending core

use thiserror::Error;

/// Main application error type
///
/// Store-level failures are always wrapped: `sqlx::Error` never crosses the
/// crate boundary as the failure type itself, only as a source on
/// [`AppError::DataAccess`].
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("member not eligible: {0}")]
    IneligibleMember(String),

    #[error("out of stock: {0}")]
    OutOfStock(String),

    #[error("duplicate loan: {0}")]
    DuplicateLoan(String),

    /// Underlying store failure, or an update/insert that affected no rows
    /// where the workflow required one.
    #[error("data access failure executing `{statement}`: {detail}")]
    DataAccess {
        statement: String,
        detail: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    /// A unit of work failed and the enclosing transaction was rolled back.
    #[error("transaction failed and was rolled back")]
    Transaction(#[source] Box<AppError>),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a driver failure, keeping the statement text for diagnostics.
    pub fn data_access(statement: &str, source: sqlx::Error) -> Self {
        AppError::DataAccess {
            statement: statement.to_string(),
            detail: source.to_string(),
            source: Some(source),
        }
    }

    /// A statement completed but affected no rows where the caller required
    /// at least one (failed stock update, vanished insert, ...).
    pub fn no_rows(statement: &str, detail: &str) -> Self {
        AppError::DataAccess {
            statement: statement.to_string(),
            detail: detail.to_string(),
            source: None,
        }
    }

    /// The failure that started it all: unwraps [`AppError::Transaction`]
    /// wrapping so callers can match on the specific workflow error.
    pub fn origin(&self) -> &AppError {
        match self {
            AppError::Transaction(source) => source.origin(),
            other => other,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_unwraps_transaction_wrapping() {
        let inner = AppError::OutOfStock("book 7".to_string());
        let wrapped = AppError::Transaction(Box::new(inner));
        assert!(matches!(wrapped.origin(), AppError::OutOfStock(_)));

        let doubly = AppError::Transaction(Box::new(wrapped));
        assert!(matches!(doubly.origin(), AppError::OutOfStock(_)));
    }

    #[test]
    fn origin_of_plain_error_is_itself() {
        let err = AppError::NotFound("member 3".to_string());
        assert!(matches!(err.origin(), AppError::NotFound(_)));
    }

    #[test]
    fn no_rows_has_no_driver_source() {
        let err = AppError::no_rows("UPDATE book SET stock=$1", "0 rows affected");
        match err {
            AppError::DataAccess { source, .. } => assert!(source.is_none()),
            _ => panic!("expected DataAccess"),
        }
    }
}
