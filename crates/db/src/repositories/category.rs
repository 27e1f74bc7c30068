//! Category repository for category database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tally_core::domain::CategoryType;
use tally_core::validation::{self, ValidationError};
use tally_shared::types::{CategoryId, UserId};
use uuid::Uuid;

use crate::entities::{budgets, categories, transactions};

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category not found for this user.
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    /// A deletion invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a category.
///
/// The type is fixed at creation; there is deliberately no update path for
/// it, since retyping a category would silently reclassify every historical
/// transaction referencing it.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Display name.
    pub name: String,
    /// Income or expense.
    pub category_type: CategoryType,
}

/// Category repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's categories, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<categories::Model>, CategoryError> {
        let rows = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(categories::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateCategoryInput,
    ) -> Result<categories::Model, CategoryError> {
        let category = categories::ActiveModel {
            id: Set(CategoryId::new().into_inner()),
            user_id: Set(user_id.into_inner()),
            name: Set(input.name),
            category_type: Set(input.category_type.into()),
            created_at: Set(Utc::now().into()),
        };

        let created = category.insert(&self.db).await?;
        tracing::debug!(category_id = %created.id, "category created");
        Ok(created)
    }

    /// Deletes a category.
    ///
    /// Ownership is resolved before any reference counting, so an id the
    /// user does not own is `NotFound` and reveals nothing about other
    /// users' rows. Categories referenced by any transaction or budget are
    /// protected.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user owns no such category,
    /// `Validation(CategoryInUse)` when references exist, or `Database` on
    /// storage failure.
    pub async fn delete(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> Result<(), CategoryError> {
        let category = categories::Entity::find_by_id(category_id.into_inner())
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(category_id.into_inner()))?;

        let referencing_txs = transactions::Entity::find()
            .filter(transactions::Column::CategoryId.eq(category.id))
            .count(&self.db)
            .await?;

        let referencing_budgets = budgets::Entity::find()
            .filter(budgets::Column::CategoryId.eq(category.id))
            .count(&self.db)
            .await?;

        validation::validate_category_deletion(referencing_txs, referencing_budgets)?;

        categories::Entity::delete_by_id(category.id).exec(&self.db).await?;

        tracing::debug!(category_id = %category_id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "category_integration_tests.rs"]
mod integration_tests;
