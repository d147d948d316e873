//! Loan workflow engine: the transactional borrow/return lifecycle
//!
//! The service is the sole writer of `book.stock` and `loan.returned`.
//! Each operation runs as one unit of work under the transaction
//! coordinator: every check and mutation commits or rolls back together.

use chrono::{NaiveDate, Utc};

use crate::{
    db::Transactor,
    error::{AppError, AppResult},
    models::loan::{Loan, NewLoan},
    repository::Repository,
    services::fines::FineCalculator,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    transactor: Transactor,
    fines: FineCalculator,
}

impl LoansService {
    pub fn new(repository: Repository, transactor: Transactor, fines: FineCalculator) -> Self {
        Self {
            repository,
            transactor,
            fines,
        }
    }

    /// Borrow a book for a member.
    ///
    /// One transaction covers the whole sequence: member eligibility, book
    /// availability, the duplicate-active-loan check, the stock decrement,
    /// and the loan insert. A failure at any step rolls everything back,
    /// the stock decrement included. The book row is locked before the
    /// availability and duplicate checks, so concurrent borrowers of the
    /// same book serialize in the store rather than both observing stale
    /// stock.
    pub async fn borrow(
        &self,
        member_id: i32,
        book_id: i32,
        date_due: NaiveDate,
    ) -> AppResult<Loan> {
        let repo = self.repository.clone();
        let loan = self
            .transactor
            .run_in_transaction::<Loan, _>(move |conn| {
                Box::pin(async move {
                    let member = repo
                        .members
                        .find_by_id(&mut *conn, member_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("member with id {} not found", member_id))
                        })?;
                    if !member.is_eligible() {
                        return Err(AppError::IneligibleMember(format!(
                            "member {} is inactive or deleted",
                            member_id
                        )));
                    }

                    let book = repo
                        .books
                        .find_by_id_for_update(&mut *conn, book_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("book with id {} not found", book_id))
                        })?;
                    if !book.is_available() {
                        return Err(AppError::OutOfStock(format!(
                            "no copies of book {} in stock",
                            book_id
                        )));
                    }

                    if repo
                        .loans
                        .has_active_loan(&mut *conn, member_id, book_id)
                        .await?
                    {
                        return Err(AppError::DuplicateLoan(format!(
                            "member {} already has an active loan for book {}",
                            member_id, book_id
                        )));
                    }

                    repo.books
                        .update_stock(&mut *conn, book_id, book.stock - 1)
                        .await?;

                    let new_loan = NewLoan {
                        member_id,
                        book_id,
                        date_loaned: Utc::now().date_naive(),
                        date_due,
                    };
                    let loan_id = repo.loans.save(&mut *conn, &new_loan).await?;
                    repo.loans
                        .find_by_id(&mut *conn, loan_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("loan with id {} not found", loan_id))
                        })
                })
            })
            .await?;

        tracing::info!(loan_id = loan.id, member_id, book_id, "book borrowed");
        Ok(loan)
    }

    /// Return a borrowed book.
    ///
    /// Idempotent: returning an already-returned loan is a no-op success.
    /// Returns `true` when the loan transitioned to returned in this call,
    /// `false` when it already was. Marking the loan returned and the stock
    /// increment are atomic: a failed stock update rolls the returned flag
    /// back. The fine, when any, is computed and logged, not persisted.
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<bool> {
        let repo = self.repository.clone();
        let fines = self.fines.clone();
        let outcome = self
            .transactor
            .run_in_transaction::<Option<i64>, _>(move |conn| {
                Box::pin(async move {
                    let loan = repo
                        .loans
                        .find_by_id_for_update(&mut *conn, loan_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("loan with id {} not found", loan_id))
                        })?;

                    if loan.returned {
                        return Ok(None);
                    }

                    repo.loans.mark_returned(&mut *conn, loan_id).await?;

                    let fine =
                        fines.calculate_fine(Some(loan.date_due), Some(Utc::now().date_naive()));

                    let book = repo
                        .books
                        .find_by_id_for_update(&mut *conn, loan.book_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("book with id {} not found", loan.book_id))
                        })?;
                    repo.books
                        .update_stock(&mut *conn, book.id, book.stock + 1)
                        .await?;

                    Ok(Some(fine))
                })
            })
            .await?;

        match outcome {
            Some(fine) => {
                tracing::info!(loan_id, fine, "loan returned");
                Ok(true)
            }
            None => {
                tracing::debug!(loan_id, "loan already returned, nothing to do");
                Ok(false)
            }
        }
    }

    /// Active loans for a member.
    pub async fn active_loans(&self, member_id: i32) -> AppResult<Vec<Loan>> {
        self.repository
            .loans
            .find_active_by_member(&self.repository.pool, member_id)
            .await
    }

    /// Loans past their due date and not yet returned.
    pub async fn overdue_loans(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.find_overdue(&self.repository.pool).await
    }

    /// Late fee for the given dates, per the configured policy.
    pub fn calculate_fine(
        &self,
        due_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> i64 {
        self.fines.calculate_fine(due_date, return_date)
    }

    /// Due date the lending policy proposes for a loan issued on
    /// `date_loaned`.
    pub fn default_due_date(&self, date_loaned: NaiveDate) -> NaiveDate {
        self.fines.default_due_date(date_loaned)
    }
}
