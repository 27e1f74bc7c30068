//! Budget repository for monthly limit database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tally_core::domain::NewBudget;
use tally_core::validation::{self, ValidationError};
use tally_shared::types::{BudgetId, CategoryId, UserId};

use crate::entities::{budgets, categories};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// A write invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for saving a budget limit.
#[derive(Debug, Clone)]
pub struct SaveBudgetInput {
    /// The expense category the limit applies to.
    pub category_id: CategoryId,
    /// Month (1-12).
    pub month: u32,
    /// Year (>= 2000).
    pub year: i32,
    /// Spending limit (must be positive).
    pub limit_amount: Decimal,
}

/// Budget repository for upsert-style operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's budgets for one month.
    ///
    /// # Errors
    ///
    /// Returns `Validation(InvalidPeriod)` for months outside 1-12 or years
    /// before 2000, or `Database` if the query fails.
    pub async fn list(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<budgets::Model>, BudgetError> {
        if !(1..=12).contains(&month) || year < 2000 {
            return Err(ValidationError::InvalidPeriod { month, year }.into());
        }

        // Month is validated to 1-12 above, so the narrowing cast is safe.
        let rows = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .filter(budgets::Column::Month.eq(i16::try_from(month).unwrap_or(0)))
            .filter(budgets::Column::Year.eq(year))
            .order_by_asc(budgets::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Saves a budget limit for `(category, month, year)`.
    ///
    /// Saving for a period that already has a budget replaces its limit in
    /// place via `ON CONFLICT ... DO UPDATE`; the row count never grows and
    /// concurrent saves cannot race into duplicates.
    ///
    /// # Errors
    ///
    /// Returns `Validation(InvalidReference)` if the category is not owned by
    /// the user, `Validation` for type/amount/period rejections, or
    /// `Database` on storage failure.
    pub async fn save(
        &self,
        user_id: UserId,
        input: SaveBudgetInput,
    ) -> Result<budgets::Model, BudgetError> {
        let category = categories::Entity::find_by_id(input.category_id.into_inner())
            .filter(categories::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(ValidationError::InvalidReference {
                field: "category_id",
                id: input.category_id.into_inner(),
            })?;

        let new_budget = NewBudget {
            category_id: input.category_id,
            month: input.month,
            year: input.year,
            limit_amount: input.limit_amount,
        };
        validation::validate_new_budget(&new_budget, category.category_type.into())?;

        // Month is validated to 1-12 above, so the narrowing cast is safe.
        let month = i16::try_from(new_budget.month).unwrap_or(0);
        let now = Utc::now();

        let budget = budgets::ActiveModel {
            id: Set(BudgetId::new().into_inner()),
            user_id: Set(user_id.into_inner()),
            category_id: Set(new_budget.category_id.into_inner()),
            month: Set(month),
            year: Set(new_budget.year),
            limit_amount: Set(new_budget.limit_amount),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let on_conflict = OnConflict::columns([
            budgets::Column::UserId,
            budgets::Column::CategoryId,
            budgets::Column::Month,
            budgets::Column::Year,
        ])
        .update_columns([budgets::Column::LimitAmount, budgets::Column::UpdatedAt])
        .to_owned();

        let saved = budgets::Entity::insert(budget)
            .on_conflict(on_conflict)
            .exec_with_returning(&self.db)
            .await?;

        tracing::debug!(budget_id = %saved.id, month, year = saved.year, "budget saved");
        Ok(saved)
    }

    /// Deletes a budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails. Deleting a budget
    /// the user does not own is a no-op.
    pub async fn delete(&self, user_id: UserId, budget_id: BudgetId) -> Result<(), BudgetError> {
        budgets::Entity::delete_by_id(budget_id.into_inner())
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;
        tracing::debug!(budget_id = %budget_id, "budget deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "budget_integration_tests.rs"]
mod integration_tests;
