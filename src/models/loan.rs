//! Loan model: one borrow transaction for a (member, book) pair

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan model from database
///
/// At most one loan with `returned = false` exists per (member, book) pair;
/// the borrow workflow checks before creating. `returned = true` is
/// terminal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub date_loaned: NaiveDate,
    pub date_due: NaiveDate,
    pub returned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Still out, not yet returned.
    pub fn is_active(&self) -> bool {
        !self.returned
    }

    /// Out past its due date as of `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.returned && today > self.date_due
    }
}

/// New loan to insert; persisted with `returned = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    pub member_id: i32,
    pub book_id: i32,
    pub date_loaned: NaiveDate,
    pub date_due: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(returned: bool) -> Loan {
        Loan {
            id: 1,
            member_id: 1,
            book_id: 1,
            date_loaned: date(2025, 1, 3),
            date_due: date(2025, 1, 10),
            returned,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn active_until_returned() {
        assert!(loan(false).is_active());
        assert!(!loan(true).is_active());
    }

    #[test]
    fn overdue_only_past_due_and_unreturned() {
        assert!(!loan(false).is_overdue(date(2025, 1, 10)));
        assert!(loan(false).is_overdue(date(2025, 1, 11)));
        assert!(!loan(true).is_overdue(date(2025, 1, 11)));
    }
}
