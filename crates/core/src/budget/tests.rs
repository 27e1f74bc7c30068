use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::types::{AccountId, BudgetId, CategoryId, TransactionId};

use crate::budget::service::BudgetService;
use crate::domain::{Budget, Category, CategoryType, Transaction};

fn category(name: &str, category_type: CategoryType) -> Category {
    Category {
        id: CategoryId::new(),
        name: name.to_string(),
        category_type,
        created_at: Utc::now(),
    }
}

fn budget(category_id: CategoryId, month: u32, year: i32, limit: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        category_id,
        month,
        year,
        limit_amount: limit,
    }
}

fn tx(category_id: CategoryId, amount: Decimal, on: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        account_id: AccountId::new(),
        category_id,
        amount,
        description: None,
        transaction_date: on,
        created_at: Utc::now(),
    }
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

#[test]
fn test_overview_over_budget_goes_negative() {
    let groceries = category("Groceries", CategoryType::Expense);
    let budgets = vec![budget(groceries.id, 6, 2024, dec!(500))];
    let transactions = vec![
        tx(groceries.id, dec!(400), june(5)),
        tx(groceries.id, dec!(250), june(20)),
    ];

    let lines = BudgetService::overview(&transactions, &budgets, &[groceries], 6, 2024);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].limit_amount, dec!(500));
    assert_eq!(lines[0].spent, dec!(650));
    assert_eq!(lines[0].remaining, dec!(-150));
}

#[test]
fn test_overview_under_budget() {
    let rent = category("Rent", CategoryType::Expense);
    let budgets = vec![budget(rent.id, 6, 2024, dec!(1200))];
    let transactions = vec![tx(rent.id, dec!(1100), june(1))];

    let lines = BudgetService::overview(&transactions, &budgets, &[rent], 6, 2024);

    assert_eq!(lines[0].remaining, dec!(100));
}

#[test]
fn test_overview_no_spending_full_limit_remains() {
    let fun = category("Entertainment", CategoryType::Expense);
    let budgets = vec![budget(fun.id, 6, 2024, dec!(200))];

    let lines = BudgetService::overview(&[], &budgets, &[fun], 6, 2024);

    assert_eq!(lines[0].spent, Decimal::ZERO);
    assert_eq!(lines[0].remaining, dec!(200));
}

#[test]
fn test_overview_ignores_other_months() {
    let groceries = category("Groceries", CategoryType::Expense);
    let budgets = vec![
        budget(groceries.id, 6, 2024, dec!(500)),
        budget(groceries.id, 7, 2024, dec!(600)),
    ];
    let transactions = vec![
        tx(groceries.id, dec!(100), june(30)),
        tx(groceries.id, dec!(999), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
    ];

    let lines = BudgetService::overview(&transactions, &budgets, &[groceries], 6, 2024);

    // only the June budget appears, and only June spending counts
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spent, dec!(100));
}

#[test]
fn test_overview_income_transactions_do_not_count_as_spending() {
    let refunds = category("Refunds", CategoryType::Income);
    let groceries = category("Groceries", CategoryType::Expense);
    let budgets = vec![budget(groceries.id, 6, 2024, dec!(500))];
    let transactions = vec![
        tx(groceries.id, dec!(50), june(3)),
        tx(refunds.id, dec!(500), june(4)),
    ];

    let lines =
        BudgetService::overview(&transactions, &budgets, &[refunds, groceries], 6, 2024);

    assert_eq!(lines[0].spent, dec!(50));
}

#[test]
fn test_overview_unbudgeted_category_omitted() {
    let groceries = category("Groceries", CategoryType::Expense);
    let transport = category("Transport", CategoryType::Expense);
    let budgets = vec![budget(groceries.id, 6, 2024, dec!(500))];
    let transactions = vec![tx(transport.id, dec!(75), june(10))];

    let lines = BudgetService::overview(
        &transactions,
        &budgets,
        &[groceries, transport],
        6,
        2024,
    );

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].category_name, "Groceries");
}

#[test]
fn test_overview_orphaned_budget_skipped() {
    let orphan = budget(CategoryId::new(), 6, 2024, dec!(100));
    let lines = BudgetService::overview(&[], &[orphan], &[], 6, 2024);
    assert!(lines.is_empty());
}

#[test]
fn test_overview_preserves_budget_order() {
    let a = category("A", CategoryType::Expense);
    let b = category("B", CategoryType::Expense);
    let budgets = vec![budget(b.id, 6, 2024, dec!(10)), budget(a.id, 6, 2024, dec!(20))];

    let lines = BudgetService::overview(&[], &budgets, &[a, b], 6, 2024);

    let names: Vec<&str> = lines.iter().map(|l| l.category_name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
}
