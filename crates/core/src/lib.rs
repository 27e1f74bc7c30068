//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `domain` - Entity types shared by every module
//! - `validation` - Pre-write invariant checks
//! - `ledger` - Period summaries and per-account balances
//! - `budget` - Budget-vs-actual reconciliation

pub mod budget;
pub mod domain;
pub mod ledger;
pub mod validation;
