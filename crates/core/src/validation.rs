//! Pre-write invariant checks for mutations.
//!
//! Every validator is a pure function over passed-in sets and counts, so the
//! rules are unit-testable without a store. All checks run before any write;
//! a rejection means no partial mutation happened.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tally_shared::types::{AccountId, CategoryId};
use uuid::Uuid;

use crate::domain::{CategoryType, NewBudget, NewTransaction};

/// Maximum length of a transaction description.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Typed rejections produced by the validation layer.
///
/// Each variant carries the offending field or value so callers can render a
/// specific message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A referenced entity is not owned by the acting user (or does not exist).
    #[error("{field} does not reference an entity owned by this user: {id}")]
    InvalidReference {
        /// Name of the offending field.
        field: &'static str,
        /// The dangling reference.
        id: Uuid,
    },

    /// Amount must be strictly positive.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// Input does not parse to a real calendar date.
    #[error("not a calendar date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    /// Budget period is out of range.
    #[error("invalid budget period: month {month}, year {year}")]
    InvalidPeriod {
        /// Offending month.
        month: u32,
        /// Offending year.
        year: i32,
    },

    /// Budgets only apply to expense categories.
    #[error("budgets can only be set for expense categories, got {0}")]
    InvalidCategoryType(CategoryType),

    /// The last remaining account cannot be deleted.
    #[error("cannot delete the last remaining account")]
    LastAccount,

    /// The account is still referenced by transactions.
    #[error("account is referenced by {0} transaction(s)")]
    AccountInUse(u64),

    /// The category is still referenced by transactions or budgets.
    #[error("category is referenced by {transactions} transaction(s) and {budgets} budget(s)")]
    CategoryInUse {
        /// Referencing transaction count.
        transactions: u64,
        /// Referencing budget count.
        budgets: u64,
    },

    /// Description exceeds the maximum length.
    #[error("description exceeds {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
///
/// Returns `InvalidDate` if the input is not a real calendar date.
pub fn parse_transaction_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Validates a new (or updated) transaction against the owner's entity sets.
///
/// # Errors
///
/// Returns `InvalidReference` if `account_id` or `category_id` is not in the
/// owner's sets, `InvalidAmount` if the amount is not positive, and
/// `DescriptionTooLong` if the description exceeds [`MAX_DESCRIPTION_LEN`].
pub fn validate_new_transaction(
    tx: &NewTransaction,
    owned_accounts: &HashSet<AccountId>,
    owned_categories: &HashSet<CategoryId>,
) -> Result<(), ValidationError> {
    if !owned_accounts.contains(&tx.account_id) {
        return Err(ValidationError::InvalidReference {
            field: "account_id",
            id: tx.account_id.into_inner(),
        });
    }
    if !owned_categories.contains(&tx.category_id) {
        return Err(ValidationError::InvalidReference {
            field: "category_id",
            id: tx.category_id.into_inner(),
        });
    }
    if tx.amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(tx.amount));
    }
    if let Some(description) = &tx.description
        && description.chars().count() > MAX_DESCRIPTION_LEN
    {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Validates a budget limit against the referenced category's type.
///
/// # Errors
///
/// Returns `InvalidCategoryType` for non-expense categories, `InvalidAmount`
/// for non-positive limits, and `InvalidPeriod` for months outside 1-12 or
/// years before 2000.
pub fn validate_new_budget(
    budget: &NewBudget,
    category_type: CategoryType,
) -> Result<(), ValidationError> {
    if !category_type.is_expense() {
        return Err(ValidationError::InvalidCategoryType(category_type));
    }
    if budget.limit_amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(budget.limit_amount));
    }
    if !(1..=12).contains(&budget.month) || budget.year < 2000 {
        return Err(ValidationError::InvalidPeriod {
            month: budget.month,
            year: budget.year,
        });
    }
    Ok(())
}

/// Validates that an account can be deleted.
///
/// A user always keeps at least one account, and an account still referenced
/// by transactions cannot be removed.
///
/// # Errors
///
/// Returns `LastAccount` or `AccountInUse`.
pub fn validate_account_deletion(
    account_count: u64,
    referencing_tx_count: u64,
) -> Result<(), ValidationError> {
    if account_count <= 1 {
        return Err(ValidationError::LastAccount);
    }
    if referencing_tx_count > 0 {
        return Err(ValidationError::AccountInUse(referencing_tx_count));
    }
    Ok(())
}

/// Validates that a category can be deleted.
///
/// # Errors
///
/// Returns `CategoryInUse` if any transaction or budget still references it.
pub fn validate_category_deletion(
    referencing_tx_count: u64,
    referencing_budget_count: u64,
) -> Result<(), ValidationError> {
    if referencing_tx_count > 0 || referencing_budget_count > 0 {
        return Err(ValidationError::CategoryInUse {
            transactions: referencing_tx_count,
            budgets: referencing_budget_count,
        });
    }
    Ok(())
}
