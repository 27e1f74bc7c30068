//! Property-based tests for ledger aggregation.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{AccountId, CategoryId, TransactionId};

use super::service::LedgerService;
use super::types::DateWindow;
use crate::domain::{Account, CategoryType, Transaction};

/// Strategy to generate a positive amount from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a category type.
fn category_type_strategy() -> impl Strategy<Value = CategoryType> {
    prop_oneof![Just(CategoryType::Income), Just(CategoryType::Expense)]
}

/// Strategy to generate a date inside June 2024.
fn june_date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=30u32).prop_map(|d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap())
}

fn make_tx(
    account_id: AccountId,
    category_id: CategoryId,
    amount: Decimal,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        account_id,
        category_id,
        amount,
        description: None,
        transaction_date: on,
        created_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* transaction set, `net_savings` equals
    /// `total_income - total_expense` exactly, with no rounding drift.
    #[test]
    fn prop_net_savings_is_exact_difference(
        entries in prop::collection::vec(
            (positive_amount(), category_type_strategy(), june_date()),
            0..32,
        ),
    ) {
        let account_id = AccountId::new();
        let mut types = HashMap::new();
        let transactions: Vec<Transaction> = entries
            .into_iter()
            .map(|(amount, category_type, on)| {
                let category_id = CategoryId::new();
                types.insert(category_id, category_type);
                make_tx(account_id, category_id, amount, on)
            })
            .collect();

        let summary = LedgerService::compute_summary(
            &transactions,
            |id| types.get(&id).copied(),
            None,
        );

        prop_assert_eq!(summary.net_savings, summary.total_income - summary.total_expense);
        prop_assert!(summary.total_income >= Decimal::ZERO);
        prop_assert!(summary.total_expense >= Decimal::ZERO);
    }

    /// *For any* transaction volume, the balance report always has exactly
    /// one row per account, in input order.
    #[test]
    fn prop_balance_rows_match_accounts(
        account_count in 0usize..8,
        entries in prop::collection::vec((positive_amount(), june_date()), 0..32),
    ) {
        let accounts: Vec<Account> = (0..account_count)
            .map(|i| Account {
                id: AccountId::new(),
                name: format!("Account {i}"),
                created_at: Utc::now(),
            })
            .collect();

        let category_id = CategoryId::new();
        let types = HashMap::from([(category_id, CategoryType::Expense)]);
        let transactions: Vec<Transaction> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (amount, on))| {
                let account_id = if accounts.is_empty() {
                    AccountId::new()
                } else {
                    accounts[i % accounts.len()].id
                };
                make_tx(account_id, category_id, amount, on)
            })
            .collect();

        let balances = LedgerService::account_balances(&transactions, &accounts, |id| {
            types.get(&id).copied()
        });

        prop_assert_eq!(balances.len(), accounts.len());
        for (summary, account) in balances.iter().zip(&accounts) {
            prop_assert_eq!(summary.account_id, account.id);
            prop_assert_eq!(summary.balance, summary.total_income - summary.total_expense);
        }
    }

    /// *For any* dated transaction, it is counted iff its date is within the
    /// window, both bounds inclusive.
    #[test]
    fn prop_window_filter_is_inclusive(on in june_date(), amount in positive_amount()) {
        let window = DateWindow::month(6, 2024).unwrap();
        let category_id = CategoryId::new();
        let types = HashMap::from([(category_id, CategoryType::Income)]);
        let transactions = vec![make_tx(AccountId::new(), category_id, amount, on)];

        let summary = LedgerService::compute_summary(
            &transactions,
            |id| types.get(&id).copied(),
            Some(&window),
        );

        prop_assert_eq!(summary.total_income, amount);
    }

    /// *For any* income-positive snapshot, the savings rate is at most 100%.
    #[test]
    fn prop_savings_rate_bounded_above(
        income in positive_amount(),
        expense in positive_amount(),
    ) {
        let account_id = AccountId::new();
        let salary = CategoryId::new();
        let food = CategoryId::new();
        let types = HashMap::from([
            (salary, CategoryType::Income),
            (food, CategoryType::Expense),
        ]);
        let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let transactions = vec![
            make_tx(account_id, salary, income, on),
            make_tx(account_id, food, expense, on),
        ];

        let summary = LedgerService::compute_summary(
            &transactions,
            |id| types.get(&id).copied(),
            None,
        );

        prop_assert!(summary.savings_rate <= Decimal::ONE_HUNDRED);
    }
}
