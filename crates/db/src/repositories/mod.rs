//! Repository implementations for database operations.

pub mod expense;

pub use expense::ExpenseRepository;
