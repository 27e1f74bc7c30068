//! Transaction repository for ledger entry database operations.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tally_core::domain::NewTransaction;
use tally_core::ledger::DateWindow;
use tally_core::validation::{self, ValidationError};
use tally_shared::types::{AccountId, CategoryId, TransactionId, UserId};
use uuid::Uuid;

use crate::entities::{accounts, categories, transactions};

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found for this user.
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// A write invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a transaction. The date arrives as raw text and is
/// parsed as part of validation.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// The account to record against.
    pub account_id: AccountId,
    /// The category classifying the transaction.
    pub category_id: CategoryId,
    /// Amount (must be positive).
    pub amount: rust_decimal::Decimal,
    /// Optional description.
    pub description: Option<String>,
    /// Calendar date as `YYYY-MM-DD`.
    pub transaction_date: String,
}

/// Input for updating a transaction. All fields are replaced.
pub type UpdateTransactionInput = CreateTransactionInput;

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's transactions, newest date first, optionally restricted
    /// to a date window (bounds inclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        user_id: UserId,
        window: Option<&DateWindow>,
    ) -> Result<Vec<transactions::Model>, TransactionError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()));

        if let Some(window) = window {
            query = query
                .filter(transactions::Column::TransactionDate.gte(window.start))
                .filter(transactions::Column::TransactionDate.lte(window.end));
        }

        let rows = query
            .order_by_desc(transactions::Column::TransactionDate)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Creates a new transaction after validating references, amount, date,
    /// and description length.
    ///
    /// # Errors
    ///
    /// Returns `Validation` with the specific rejection, or `Database` on
    /// storage failure.
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateTransactionInput,
    ) -> Result<transactions::Model, TransactionError> {
        let new_tx = self.validate(user_id, &input).await?;

        let tx = transactions::ActiveModel {
            id: Set(TransactionId::new().into_inner()),
            user_id: Set(user_id.into_inner()),
            account_id: Set(new_tx.account_id.into_inner()),
            category_id: Set(new_tx.category_id.into_inner()),
            amount: Set(new_tx.amount),
            description: Set(new_tx.description),
            transaction_date: Set(new_tx.transaction_date),
            created_at: Set(Utc::now().into()),
        };

        let created = tx.insert(&self.db).await?;
        tracing::debug!(transaction_id = %created.id, "transaction created");
        Ok(created)
    }

    /// Replaces every field of an existing transaction.
    ///
    /// The replacement passes the same validation as creation; on rejection
    /// the stored row is untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user owns no such transaction, `Validation`
    /// with the specific rejection, or `Database` on storage failure.
    pub async fn update(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
        input: UpdateTransactionInput,
    ) -> Result<transactions::Model, TransactionError> {
        let existing = transactions::Entity::find_by_id(transaction_id.into_inner())
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound(transaction_id.into_inner()))?;

        let new_tx = self.validate(user_id, &input).await?;

        let mut tx: transactions::ActiveModel = existing.into();
        tx.account_id = Set(new_tx.account_id.into_inner());
        tx.category_id = Set(new_tx.category_id.into_inner());
        tx.amount = Set(new_tx.amount);
        tx.description = Set(new_tx.description);
        tx.transaction_date = Set(new_tx.transaction_date);

        let updated = tx.update(&self.db).await?;
        tracing::debug!(transaction_id = %updated.id, "transaction updated");
        Ok(updated)
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user owns no such transaction, or
    /// `Database` on storage failure.
    pub async fn delete(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> Result<(), TransactionError> {
        let result = transactions::Entity::delete_by_id(transaction_id.into_inner())
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TransactionError::NotFound(transaction_id.into_inner()));
        }

        tracing::debug!(transaction_id = %transaction_id, "transaction deleted");
        Ok(())
    }

    /// Runs the full pre-write validation for create/update, resolving the
    /// user's owned account and category id sets from the store.
    async fn validate(
        &self,
        user_id: UserId,
        input: &CreateTransactionInput,
    ) -> Result<NewTransaction, TransactionError> {
        let transaction_date = validation::parse_transaction_date(&input.transaction_date)?;

        let owned_accounts: HashSet<AccountId> = accounts::Entity::find()
            .filter(accounts::Column::UserId.eq(user_id.into_inner()))
            .select_only()
            .column(accounts::Column::Id)
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(AccountId::from_uuid)
            .collect();

        let owned_categories: HashSet<CategoryId> = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .select_only()
            .column(categories::Column::Id)
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(CategoryId::from_uuid)
            .collect();

        let new_tx = NewTransaction {
            account_id: input.account_id,
            category_id: input.category_id,
            amount: input.amount,
            description: input.description.clone(),
            transaction_date,
        };

        validation::validate_new_transaction(&new_tx, &owned_accounts, &owned_categories)?;
        Ok(new_tx)
    }
}
