//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense records, categories, validation and the storage contract
//! - `dashboard` - Time-window filtering and spending aggregates

pub mod dashboard;
pub mod expense;
