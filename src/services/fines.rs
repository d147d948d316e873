//! Fine policy: pure late-fee calculation

use chrono::{Duration, NaiveDate};

/// Calculates fines from due date and return date at a per-day rate.
/// If returned on or before the due date, the fine is 0.
#[derive(Debug, Clone)]
pub struct FineCalculator {
    loan_days: u32,
    fine_per_day: i64,
}

impl FineCalculator {
    pub fn new(loan_days: u32, fine_per_day: i64) -> Self {
        Self {
            loan_days,
            fine_per_day,
        }
    }

    /// Fine owed when a loan due on `due_date` comes back on `return_date`.
    ///
    /// Zero when either date is absent or the return is on or before the
    /// due date; otherwise whole days late times the per-day rate.
    pub fn calculate_fine(
        &self,
        due_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> i64 {
        let (Some(due), Some(returned)) = (due_date, return_date) else {
            return 0;
        };
        if returned <= due {
            return 0;
        }
        (returned - due).num_days() * self.fine_per_day
    }

    /// Due date the lending policy proposes for a loan issued on
    /// `date_loaned`.
    pub fn default_due_date(&self, date_loaned: NaiveDate) -> NaiveDate {
        date_loaned + Duration::days(i64::from(self.loan_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_fine_when_returned_on_or_before_due() {
        let calc = FineCalculator::new(7, 1500);
        assert_eq!(calc.calculate_fine(Some(date(2025, 1, 10)), Some(date(2025, 1, 10))), 0);
        assert_eq!(calc.calculate_fine(Some(date(2025, 1, 10)), Some(date(2025, 1, 9))), 0);
    }

    #[test]
    fn fine_accumulates_per_day_late() {
        let calc = FineCalculator::new(7, 1500);
        // 3 days late
        assert_eq!(calc.calculate_fine(Some(date(2025, 1, 10)), Some(date(2025, 1, 13))), 4500);
    }

    #[test]
    fn absent_dates_yield_zero() {
        let calc = FineCalculator::new(7, 1500);
        assert_eq!(calc.calculate_fine(None, Some(date(2025, 1, 13))), 0);
        assert_eq!(calc.calculate_fine(Some(date(2025, 1, 10)), None), 0);
        assert_eq!(calc.calculate_fine(None, None), 0);
    }

    #[test]
    fn default_due_date_adds_loan_period() {
        let calc = FineCalculator::new(7, 1500);
        assert_eq!(calc.default_due_date(date(2025, 1, 3)), date(2025, 1, 10));
    }
}
