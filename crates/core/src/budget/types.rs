//! Budget reconciliation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{BudgetId, CategoryId};

/// One budget line merged with actual spending for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverviewLine {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// The budgeted expense category.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// The configured spending limit (always positive).
    pub limit_amount: Decimal,
    /// Actual expense total for the period (never negative).
    pub spent: Decimal,
    /// `limit_amount - spent`; negative means over budget.
    pub remaining: Decimal,
}
