//! Report repository: the read side of the engine.
//!
//! Each report fetches one user's rows, converts them to domain snapshots,
//! and delegates the arithmetic to the pure services in `tally-core`. No
//! totals are stored; every report is recomputed from the rows it reads.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tally_core::budget::{BudgetOverviewLine, BudgetService};
use tally_core::domain::{Account, Budget, Category, CategoryType, Transaction};
use tally_core::ledger::{AccountSummary, DateWindow, LedgerService, PeriodSummary};
use tally_core::validation::ValidationError;
use tally_shared::types::{CategoryId, UserId};

use crate::entities::{accounts, budgets, categories, transactions};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The requested period is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Read-side repository computing reports from row snapshots.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes income/expense/savings totals for one calendar month.
    ///
    /// # Errors
    ///
    /// Returns `Validation(InvalidPeriod)` for months outside 1-12 or years
    /// before 2000, or `Database` on storage failure.
    pub async fn summary(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<PeriodSummary, ReportError> {
        let window = month_window(month, year)?;
        let transactions = self.transactions_in(user_id, &window).await?;
        let types = self.category_types(user_id).await?;

        Ok(LedgerService::compute_summary(
            &transactions,
            |id| types.get(&id).copied(),
            Some(&window),
        ))
    }

    /// Computes per-account income/expense/balance totals for one month.
    ///
    /// Every account the user owns appears exactly once, oldest first, even
    /// with no transactions in the month.
    ///
    /// # Errors
    ///
    /// Returns `Validation(InvalidPeriod)` for an invalid period, or
    /// `Database` on storage failure.
    pub async fn account_balances(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<AccountSummary>, ReportError> {
        let window = month_window(month, year)?;
        let transactions = self.transactions_in(user_id, &window).await?;
        let types = self.category_types(user_id).await?;

        let account_rows = accounts::Entity::find()
            .filter(accounts::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(accounts::Column::CreatedAt)
            .all(&self.db)
            .await?;
        let account_list: Vec<Account> = account_rows.into_iter().map(Account::from).collect();

        Ok(LedgerService::account_balances(
            &transactions,
            &account_list,
            |id| types.get(&id).copied(),
        ))
    }

    /// Merges the month's budget limits with actual spending.
    ///
    /// # Errors
    ///
    /// Returns `Validation(InvalidPeriod)` for an invalid period, or
    /// `Database` on storage failure.
    pub async fn budget_overview(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<BudgetOverviewLine>, ReportError> {
        let window = month_window(month, year)?;
        let transactions = self.transactions_in(user_id, &window).await?;

        let category_rows = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .all(&self.db)
            .await?;
        let category_list: Vec<Category> =
            category_rows.into_iter().map(Category::from).collect();

        // Month is validated to 1-12 by month_window, so the cast is safe.
        let budget_rows = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .filter(budgets::Column::Month.eq(i16::try_from(month).unwrap_or(0)))
            .filter(budgets::Column::Year.eq(year))
            .order_by_asc(budgets::Column::CreatedAt)
            .all(&self.db)
            .await?;
        let budget_list: Vec<Budget> = budget_rows.into_iter().map(Budget::from).collect();

        Ok(BudgetService::overview(
            &transactions,
            &budget_list,
            &category_list,
            month,
            year,
        ))
    }

    /// Fetches the user's transactions dated inside `window` as domain values.
    async fn transactions_in(
        &self,
        user_id: UserId,
        window: &DateWindow,
    ) -> Result<Vec<Transaction>, DbErr> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .filter(transactions::Column::TransactionDate.gte(window.start))
            .filter(transactions::Column::TransactionDate.lte(window.end))
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Builds the category-id to type lookup for the user's categories.
    async fn category_types(
        &self,
        user_id: UserId,
    ) -> Result<HashMap<CategoryId, CategoryType>, DbErr> {
        let rows = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| (CategoryId::from_uuid(row.id), row.category_type.into()))
            .collect())
    }
}

/// Resolves `(month, year)` to an inclusive calendar window, rejecting
/// periods the budget rules would reject.
fn month_window(month: u32, year: i32) -> Result<DateWindow, ValidationError> {
    if year < 2000 {
        return Err(ValidationError::InvalidPeriod { month, year });
    }
    DateWindow::month(month, year).ok_or(ValidationError::InvalidPeriod { month, year })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_month_window_valid() {
        let window = month_window(6, 2024).unwrap();
        assert_eq!(window.start.to_string(), "2024-06-01");
        assert_eq!(window.end.to_string(), "2024-06-30");
    }

    #[rstest]
    #[case(0, 2024)]
    #[case(13, 2024)]
    #[case(6, 1999)]
    fn test_month_window_rejects_bad_periods(#[case] month: u32, #[case] year: i32) {
        assert_eq!(
            month_window(month, year),
            Err(ValidationError::InvalidPeriod { month, year })
        );
    }
}
