//! Ledger aggregation over immutable transaction snapshots.
//!
//! All functions here are pure: they read a snapshot of one user's
//! collections and compute totals. Nothing is cached between calls, so they
//! are safe to run concurrently and repeatedly.

use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::types::CategoryId;

use super::types::{AccountSummary, DateWindow, PeriodSummary};
use crate::domain::{Account, CategoryType, Transaction};

/// Ledger aggregation service.
pub struct LedgerService;

impl LedgerService {
    /// Computes income/expense/savings totals for a transaction snapshot.
    ///
    /// Transactions outside `window` are ignored (bounds inclusive; no window
    /// means every transaction counts). A transaction whose category cannot
    /// be resolved is treated as orphaned and skipped rather than failing the
    /// whole summary.
    #[must_use]
    pub fn compute_summary<F>(
        transactions: &[Transaction],
        category_type_of: F,
        window: Option<&DateWindow>,
    ) -> PeriodSummary
    where
        F: Fn(CategoryId) -> Option<CategoryType>,
    {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;

        for tx in transactions {
            if let Some(window) = window
                && !window.contains(tx.transaction_date)
            {
                continue;
            }
            match category_type_of(tx.category_id) {
                Some(CategoryType::Income) => total_income += tx.amount,
                Some(CategoryType::Expense) => total_expense += tx.amount,
                None => {} // orphaned transaction, excluded
            }
        }

        let net_savings = total_income - total_expense;
        let savings_rate = if total_income > Decimal::ZERO {
            (net_savings / total_income * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        };

        PeriodSummary {
            total_income,
            total_expense,
            net_savings,
            savings_rate,
        }
    }

    /// Computes income/expense/balance totals per account.
    ///
    /// Every account in `accounts` appears exactly once, in input order,
    /// including accounts with no transactions (all totals zero). Orphaned
    /// transactions are skipped exactly as in [`Self::compute_summary`].
    #[must_use]
    pub fn account_balances<F>(
        transactions: &[Transaction],
        accounts: &[Account],
        category_type_of: F,
    ) -> Vec<AccountSummary>
    where
        F: Fn(CategoryId) -> Option<CategoryType>,
    {
        let mut summaries: Vec<AccountSummary> = accounts
            .iter()
            .map(|account| AccountSummary {
                account_id: account.id,
                name: account.name.clone(),
                total_income: Decimal::ZERO,
                total_expense: Decimal::ZERO,
                balance: Decimal::ZERO,
            })
            .collect();

        for tx in transactions {
            let Some(summary) = summaries.iter_mut().find(|s| s.account_id == tx.account_id)
            else {
                continue;
            };
            match category_type_of(tx.category_id) {
                Some(CategoryType::Income) => summary.total_income += tx.amount,
                Some(CategoryType::Expense) => summary.total_expense += tx.amount,
                None => {}
            }
        }

        for summary in &mut summaries {
            summary.balance = summary.total_income - summary.total_expense;
        }

        summaries
    }
}
