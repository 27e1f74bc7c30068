//! Entity types for the ledger and budget engine.
//!
//! Every entity is scoped to an owning user; the owner itself is resolved by
//! the caller, so these types carry no user field. Each aggregation operates
//! on an immutable snapshot of one user's collections.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, BudgetId, CategoryId, TransactionId};

/// Category type: income or expense.
///
/// The type of the referenced category is the only thing that decides whether
/// a transaction amount counts toward income or expense; amounts themselves
/// are always positive and carry no sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl CategoryType {
    /// Returns true for expense categories.
    #[must_use]
    pub fn is_expense(self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// An account holding transactions (e.g., "Checking", "Cash").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Account name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A transaction category.
///
/// The `category_type` is immutable after creation: flipping it would silently
/// change the meaning of every historic transaction referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Income or expense.
    pub category_type: CategoryType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A recorded income or expense transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// The account this transaction belongs to.
    pub account_id: AccountId,
    /// The category classifying this transaction.
    pub category_id: CategoryId,
    /// Amount, always positive; direction comes from the category type.
    pub amount: Decimal,
    /// Optional free-form description (at most 255 characters).
    pub description: Option<String>,
    /// The calendar date the transaction occurred on.
    pub transaction_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A monthly spending limit for one expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// The expense category this limit applies to.
    pub category_id: CategoryId,
    /// Month (1-12).
    pub month: u32,
    /// Year (>= 2000).
    pub year: i32,
    /// Spending limit, always positive.
    pub limit_amount: Decimal,
}

/// Input for creating (or fully replacing the fields of) a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// The account to record against.
    pub account_id: AccountId,
    /// The category classifying the transaction.
    pub category_id: CategoryId,
    /// Amount (must be positive).
    pub amount: Decimal,
    /// Optional description (at most 255 characters).
    pub description: Option<String>,
    /// The calendar date the transaction occurred on.
    pub transaction_date: NaiveDate,
}

/// Input for saving a budget limit.
///
/// Saving twice for the same `(category_id, month, year)` replaces the limit;
/// it never creates a second budget row.
#[derive(Debug, Clone)]
pub struct NewBudget {
    /// The expense category the limit applies to.
    pub category_id: CategoryId,
    /// Month (1-12).
    pub month: u32,
    /// Year (>= 2000).
    pub year: i32,
    /// Spending limit (must be positive).
    pub limit_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_type_is_expense() {
        assert!(CategoryType::Expense.is_expense());
        assert!(!CategoryType::Income.is_expense());
    }

    #[test]
    fn test_category_type_display() {
        assert_eq!(CategoryType::Income.to_string(), "income");
        assert_eq!(CategoryType::Expense.to_string(), "expense");
    }
}
