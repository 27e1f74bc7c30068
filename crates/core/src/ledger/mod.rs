//! Period summaries and per-account balances.
//!
//! This module implements the read side of the ledger:
//! - Income/expense/savings summaries over an optional date window
//! - Per-account balance breakdowns
//! - Calendar-month window arithmetic

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::LedgerService;
pub use types::{AccountSummary, DateWindow, PeriodSummary};
