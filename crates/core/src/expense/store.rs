//! Contract for the hosted storage backend.

use async_trait::async_trait;
use tally_shared::types::{ExpenseId, UserId};

use super::error::StoreError;
use super::types::{Expense, ExpenseUpdate, NewExpense};

/// Owner-scoped expense storage.
///
/// Implementations only ever read or change rows belonging to `owner`; an
/// ID owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Lists the owner's expenses, newest date first, then newest created first.
    async fn list_expenses(&self, owner: UserId) -> Result<Vec<Expense>, StoreError>;

    /// Fetches one of the owner's expenses.
    async fn get_expense(&self, owner: UserId, id: ExpenseId) -> Result<Expense, StoreError>;

    /// Validates and stores a new expense.
    async fn create_expense(&self, owner: UserId, input: NewExpense)
    -> Result<Expense, StoreError>;

    /// Validates and applies a partial update.
    async fn update_expense(
        &self,
        owner: UserId,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, StoreError>;

    /// Deletes one of the owner's expenses.
    async fn delete_expense(&self, owner: UserId, id: ExpenseId) -> Result<(), StoreError>;
}
