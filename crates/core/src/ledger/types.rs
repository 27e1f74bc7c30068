//! Ledger aggregation result types.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountId;

/// An inclusive calendar-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window covering one calendar month.
    ///
    /// Returns `None` if `month` is not 1-12 or the year is out of range.
    #[must_use]
    pub fn month(month: u32, year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { start, end })
    }

    /// Returns true if `date` falls inside the window (both bounds included).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Income/expense/savings totals for a set of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of amounts whose category is income-typed.
    pub total_income: Decimal,
    /// Sum of amounts whose category is expense-typed.
    pub total_expense: Decimal,
    /// `total_income - total_expense` (exact, no rounding).
    pub net_savings: Decimal,
    /// `net_savings / total_income * 100`, rounded half-away-from-zero to
    /// 2 decimal places; 0 when there is no income.
    pub savings_rate: Decimal,
}

/// Income, expense, and balance totals for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Account ID.
    pub account_id: AccountId,
    /// Account name.
    pub name: String,
    /// Income recorded against this account.
    pub total_income: Decimal,
    /// Expense recorded against this account.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_window_bounds() {
        let window = DateWindow::month(6, 2024).unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_month_window_leap_february() {
        let window = DateWindow::month(2, 2024).unwrap();
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let window = DateWindow::month(2, 2023).unwrap();
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_month_window_december_stays_in_year() {
        let window = DateWindow::month(12, 2024).unwrap();
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_month_window_invalid_month() {
        assert!(DateWindow::month(0, 2024).is_none());
        assert!(DateWindow::month(13, 2024).is_none());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = DateWindow::month(6, 2024).unwrap();
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
    }
}
