//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every query is scoped to the owning user, so rows belonging to another
//! user are indistinguishable from absent rows. Validation runs before any
//! write; storage failures are passed through verbatim as `Database` errors.

pub mod account;
pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

#[cfg(test)]
mod test_support;

pub use account::{AccountError, AccountRepository};
pub use budget::{BudgetError, BudgetRepository, SaveBudgetInput};
pub use category::{CategoryError, CategoryRepository, CreateCategoryInput};
pub use report::{ReportError, ReportRepository};
pub use transaction::{
    CreateTransactionInput, TransactionError, TransactionRepository, UpdateTransactionInput,
};
