//! Expense records and the storage contract.
//!
//! This module provides:
//! - The expense model and its fixed category set
//! - Validation of writes and of rows read back from storage
//! - The `ExpenseStore` trait implemented by storage backends
//! - An in-memory store

pub mod category;
pub mod error;
pub mod memory;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use category::Category;
pub use error::{ExpenseError, RecordRejection, StoreError};
pub use memory::MemoryExpenseStore;
pub use store::ExpenseStore;
pub use types::{Expense, ExpenseRecord, ExpenseUpdate, NewExpense};
pub use validation::{normalize_notes, partition_records, validate_amount, validate_title};
