//! Budget reconciliation over immutable snapshots.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::BudgetOverviewLine;
use crate::domain::{Budget, Category, CategoryType, Transaction};
use crate::ledger::DateWindow;

/// Budget reconciliation service.
pub struct BudgetService;

impl BudgetService {
    /// Merges budget limits for `(month, year)` with actual expense totals.
    ///
    /// Produces one line per budget matching the period, in the budgets'
    /// input order. `spent` sums the expense transactions of the budget's
    /// category dated inside the calendar month; `remaining` is
    /// `limit - spent` and may go negative. Categories without a budget for
    /// the period are omitted (limits are set explicitly, never
    /// auto-populated). A budget whose category is missing from the snapshot
    /// is skipped like any other orphan.
    #[must_use]
    pub fn overview(
        transactions: &[Transaction],
        budgets: &[Budget],
        categories: &[Category],
        month: u32,
        year: i32,
    ) -> Vec<BudgetOverviewLine> {
        let Some(window) = DateWindow::month(month, year) else {
            return Vec::new();
        };

        let by_id: HashMap<_, _> = categories.iter().map(|c| (c.id, c)).collect();

        let mut spent_by_category: HashMap<_, Decimal> = HashMap::new();
        for tx in transactions {
            if !window.contains(tx.transaction_date) {
                continue;
            }
            let Some(category) = by_id.get(&tx.category_id) else {
                continue;
            };
            if category.category_type == CategoryType::Expense {
                *spent_by_category.entry(tx.category_id).or_default() += tx.amount;
            }
        }

        budgets
            .iter()
            .filter(|b| b.month == month && b.year == year)
            .filter_map(|budget| {
                let category = by_id.get(&budget.category_id)?;
                let spent = spent_by_category
                    .get(&budget.category_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                Some(BudgetOverviewLine {
                    budget_id: budget.id,
                    category_id: budget.category_id,
                    category_name: category.name.clone(),
                    limit_amount: budget.limit_amount,
                    spent,
                    remaining: budget.limit_amount - spent,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
