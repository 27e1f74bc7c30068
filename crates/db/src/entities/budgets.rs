//! `SeaORM` Entity for the budgets table.
//!
//! One row per `(user_id, category_id, month, year)`; saving again for the
//! same key replaces `limit_amount` via `ON CONFLICT DO UPDATE`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_shared::types::{BudgetId, CategoryId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub month: i16,
    pub year: i32,
    pub limit_amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for tally_core::domain::Budget {
    fn from(model: Model) -> Self {
        Self {
            id: BudgetId::from_uuid(model.id),
            category_id: CategoryId::from_uuid(model.category_id),
            month: u32::from(model.month.unsigned_abs()),
            year: model.year,
            limit_amount: model.limit_amount,
        }
    }
}
