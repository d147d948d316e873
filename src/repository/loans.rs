//! Loans repository for database operations

use sqlx::{Executor, FromRow, Postgres, Row};

use crate::{
    db::gateway,
    error::{AppError, AppResult},
    models::loan::{Loan, NewLoan},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoansRepository;

impl LoansRepository {
    pub fn new() -> Self {
        Self
    }

    /// Get loan by ID
    pub async fn find_by_id<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<Loan>> {
        gateway::query_one(db, "SELECT * FROM loan WHERE id = $1", |q| q.bind(id), |row| Loan::from_row(row))
            .await
    }

    /// Get loan by ID, locking the row until the enclosing transaction
    /// ends. Keeps the return workflow idempotent under concurrent callers.
    pub async fn find_by_id_for_update<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<Loan>> {
        gateway::query_one(
            db,
            "SELECT * FROM loan WHERE id = $1 FOR UPDATE",
            |q| q.bind(id),
            |row| Loan::from_row(row),
        )
        .await
    }

    /// Whether the member already has an active loan for the book.
    pub async fn has_active_loan<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        member_id: i32,
        book_id: i32,
    ) -> AppResult<bool> {
        let exists = gateway::query_one(
            db,
            "SELECT EXISTS(SELECT 1 FROM loan WHERE member_id = $1 AND book_id = $2 AND returned = FALSE)",
            |q| q.bind(member_id).bind(book_id),
            |row| row.try_get::<bool, _>(0),
        )
        .await?;
        Ok(exists.unwrap_or(false))
    }

    /// Active loans for a member, most recent first.
    pub async fn find_active_by_member<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        member_id: i32,
    ) -> AppResult<Vec<Loan>> {
        gateway::query(
            db,
            "SELECT * FROM loan WHERE member_id = $1 AND returned = FALSE ORDER BY date_loaned DESC",
            |q| q.bind(member_id),
            |row| Loan::from_row(row),
        )
        .await
    }

    /// Loans past their due date and still out.
    pub async fn find_overdue<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
    ) -> AppResult<Vec<Loan>> {
        gateway::query(
            db,
            "SELECT * FROM loan WHERE date_due < CURRENT_DATE AND returned = FALSE ORDER BY date_due",
            |q| q,
            |row| Loan::from_row(row),
        )
        .await
    }

    /// Insert a new loan with `returned = false`, returning the generated
    /// id.
    pub async fn save<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        loan: &NewLoan,
    ) -> AppResult<i32> {
        gateway::insert_returning_id(
            db,
            "INSERT INTO loan (member_id, book_id, date_loaned, date_due, returned) \
             VALUES ($1, $2, $3, $4, FALSE) RETURNING id",
            |q| {
                q.bind(loan.member_id)
                    .bind(loan.book_id)
                    .bind(loan.date_loaned)
                    .bind(loan.date_due)
            },
        )
        .await
    }

    /// Flip the loan to returned. Zero affected rows is a failure: the
    /// workflow holds the row it just loaded.
    pub async fn mark_returned<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        loan_id: i32,
    ) -> AppResult<()> {
        const SQL: &str = "UPDATE loan SET returned = TRUE, updated_at = NOW() WHERE id = $1";
        let rows = gateway::execute(db, SQL, |q| q.bind(loan_id)).await?;
        if rows == 0 {
            return Err(AppError::no_rows(
                SQL,
                &format!("mark-returned for loan {} affected no rows", loan_id),
            ));
        }
        Ok(())
    }
}
