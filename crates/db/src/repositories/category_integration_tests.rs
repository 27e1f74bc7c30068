//! Category repository tests against a live Postgres.
//!
//! Each test skips silently when no database is reachable (see
//! `test_support::connect`). Data is isolated per test by using a fresh
//! user id.

use rust_decimal_macros::dec;

use super::*;
use crate::repositories::budget::{BudgetRepository, SaveBudgetInput};
use crate::repositories::test_support;

fn expense(name: &str) -> CreateCategoryInput {
    CreateCategoryInput {
        name: name.to_string(),
        category_type: CategoryType::Expense,
    }
}

#[tokio::test]
async fn test_delete_unreferenced_category() {
    let Some(db) = test_support::connect().await else {
        return;
    };
    let repo = CategoryRepository::new(db);
    let user_id = UserId::new();
    let category = repo.create(user_id, expense("Misc")).await.expect("create");

    repo.delete(user_id, CategoryId::from_uuid(category.id))
        .await
        .expect("delete");

    assert!(repo.list(user_id).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_delete_budgeted_category_rejected() {
    let Some(db) = test_support::connect().await else {
        return;
    };
    let repo = CategoryRepository::new(db.clone());
    let user_id = UserId::new();
    let category = repo.create(user_id, expense("Rent")).await.expect("create");
    let category_id = CategoryId::from_uuid(category.id);

    BudgetRepository::new(db)
        .save(
            user_id,
            SaveBudgetInput {
                category_id,
                month: 6,
                year: 2024,
                limit_amount: dec!(1200),
            },
        )
        .await
        .expect("save budget");

    let err = repo.delete(user_id, category_id).await.unwrap_err();

    assert!(matches!(
        err,
        CategoryError::Validation(ValidationError::CategoryInUse {
            transactions: 0,
            budgets: 1,
        })
    ));
}

// Ownership resolves before any reference counting: a foreign in-use
// category id must come back NotFound, never CategoryInUse.
#[tokio::test]
async fn test_delete_foreign_category_is_not_found() {
    let Some(db) = test_support::connect().await else {
        return;
    };
    let repo = CategoryRepository::new(db.clone());
    let owner = UserId::new();
    let intruder = UserId::new();
    let theirs = repo.create(owner, expense("Rent")).await.expect("create");
    let category_id = CategoryId::from_uuid(theirs.id);

    BudgetRepository::new(db)
        .save(
            owner,
            SaveBudgetInput {
                category_id,
                month: 6,
                year: 2024,
                limit_amount: dec!(1200),
            },
        )
        .await
        .expect("save budget");

    let err = repo.delete(intruder, category_id).await.unwrap_err();

    assert!(matches!(err, CategoryError::NotFound(id) if id == theirs.id));
    // the owner's category is untouched
    assert_eq!(repo.list(owner).await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_category_is_not_found() {
    let Some(db) = test_support::connect().await else {
        return;
    };
    let repo = CategoryRepository::new(db);
    let missing = CategoryId::new();

    let err = repo.delete(UserId::new(), missing).await.unwrap_err();

    assert!(matches!(err, CategoryError::NotFound(id) if id == missing.into_inner()));
}
