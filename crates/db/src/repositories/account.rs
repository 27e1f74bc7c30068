//! Account repository for account database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tally_core::validation::{self, ValidationError};
use tally_shared::types::{AccountId, UserId};
use uuid::Uuid;

use crate::entities::{accounts, transactions};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Account not found for this user.
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    /// A deletion invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's accounts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<accounts::Model>, AccountError> {
        let rows = accounts::Entity::find()
            .filter(accounts::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(accounts::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<accounts::Model, AccountError> {
        let account = accounts::ActiveModel {
            id: Set(AccountId::new().into_inner()),
            user_id: Set(user_id.into_inner()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now().into()),
        };

        let created = account.insert(&self.db).await?;
        tracing::debug!(account_id = %created.id, "account created");
        Ok(created)
    }

    /// Deletes an account.
    ///
    /// Ownership is resolved before any reference counting, so an id the
    /// user does not own is `NotFound` and reveals nothing about other
    /// users' rows. The last remaining account and accounts still
    /// referenced by transactions are protected.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user owns no such account, `Validation`
    /// for `LastAccount`/`AccountInUse`, or `Database` on storage failure.
    pub async fn delete(&self, user_id: UserId, account_id: AccountId) -> Result<(), AccountError> {
        let account = accounts::Entity::find_by_id(account_id.into_inner())
            .filter(accounts::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(account_id.into_inner()))?;

        let account_count = accounts::Entity::find()
            .filter(accounts::Column::UserId.eq(user_id.into_inner()))
            .count(&self.db)
            .await?;

        let referencing_txs = transactions::Entity::find()
            .filter(transactions::Column::AccountId.eq(account.id))
            .count(&self.db)
            .await?;

        validation::validate_account_deletion(account_count, referencing_txs)?;

        accounts::Entity::delete_by_id(account.id).exec(&self.db).await?;

        tracing::debug!(account_id = %account_id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_integration_tests.rs"]
mod integration_tests;
