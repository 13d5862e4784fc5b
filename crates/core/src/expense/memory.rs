//! In-process expense store.
//!
//! Used when no database is configured, and as the backend for API tests.

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use tally_shared::types::{ExpenseId, UserId};
use tokio::sync::RwLock;

use super::error::StoreError;
use super::store::ExpenseStore;
use super::types::{Expense, ExpenseUpdate, NewExpense};

/// Expense store that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with expenses.
    #[must_use]
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn list_expenses(&self, owner: UserId) -> Result<Vec<Expense>, StoreError> {
        let mut owned: Vec<Expense> = self
            .expenses
            .read()
            .await
            .iter()
            .filter(|e| e.owner == owner)
            .cloned()
            .collect();

        owned.sort_by_key(|e| (Reverse(e.date), Reverse(e.created_at)));
        Ok(owned)
    }

    async fn get_expense(&self, owner: UserId, id: ExpenseId) -> Result<Expense, StoreError> {
        self.expenses
            .read()
            .await
            .iter()
            .find(|e| e.id == id && e.owner == owner)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create_expense(
        &self,
        owner: UserId,
        input: NewExpense,
    ) -> Result<Expense, StoreError> {
        let input = input.validate()?;

        let expense = Expense {
            id: ExpenseId::new(),
            owner,
            title: input.title,
            amount: input.amount,
            category: input.category,
            date: input.date,
            notes: input.notes,
            created_at: Utc::now(),
        };

        self.expenses.write().await.push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(
        &self,
        owner: UserId,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, StoreError> {
        let update = update.validate()?;

        let mut expenses = self.expenses.write().await;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id && e.owner == owner)
            .ok_or(StoreError::NotFound(id))?;

        update.apply_to(expense);
        Ok(expense.clone())
    }

    async fn delete_expense(&self, owner: UserId, id: ExpenseId) -> Result<(), StoreError> {
        let mut expenses = self.expenses.write().await;
        let before = expenses.len();
        expenses.retain(|e| !(e.id == id && e.owner == owner));

        if expenses.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
