//! Budget-vs-actual reconciliation.
//!
//! Merges a user's budget limits for one month with aggregated expense
//! totals per category. The only over-budget signal is `remaining < 0`;
//! boolean framing is left to callers.

pub mod service;
pub mod types;

pub use service::BudgetService;
pub use types::BudgetOverviewLine;
