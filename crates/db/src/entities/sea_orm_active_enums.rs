//! Database enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category type stored in the `category_type` Postgres enum.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category_type")]
pub enum CategoryType {
    /// Money coming in.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<CategoryType> for tally_core::domain::CategoryType {
    fn from(value: CategoryType) -> Self {
        match value {
            CategoryType::Income => Self::Income,
            CategoryType::Expense => Self::Expense,
        }
    }
}

impl From<tally_core::domain::CategoryType> for CategoryType {
    fn from(value: tally_core::domain::CategoryType) -> Self {
        match value {
            tally_core::domain::CategoryType::Income => Self::Income,
            tally_core::domain::CategoryType::Expense => Self::Expense,
        }
    }
}
