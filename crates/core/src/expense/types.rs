//! Expense data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{ExpenseId, Money, UserId};

use super::category::Category;

/// A single spending transaction recorded by a user.
///
/// Expenses reach the rest of the system only after validation at the
/// storage boundary, so every field here already holds its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID, assigned on creation.
    pub id: ExpenseId,
    /// Owner of the expense.
    pub owner: UserId,
    /// Display title (non-empty).
    pub title: String,
    /// Amount spent (non-negative, whole cents).
    pub amount: Money,
    /// Spending category.
    pub category: Category,
    /// Day the expense occurred.
    pub date: NaiveDate,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an expense. The owner comes from the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Display title.
    pub title: String,
    /// Amount spent.
    pub amount: Money,
    /// Spending category.
    pub category: Category,
    /// Day the expense occurred.
    pub date: NaiveDate,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Partial update of an expense. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    /// New title.
    pub title: Option<String>,
    /// New amount.
    pub amount: Option<Money>,
    /// New category.
    pub category: Option<Category>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New notes; `Some(None)` clears them.
    pub notes: Option<Option<String>>,
}

impl ExpenseUpdate {
    /// Returns true if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.notes.is_none()
    }

    /// Applies the (already validated) update to an expense.
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(title) = self.title {
            expense.title = title;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(notes) = self.notes {
            expense.notes = notes;
        }
    }
}

/// A row as the storage backend returns it, before validation.
///
/// The backend is schemaless from our point of view: the category is free
/// text and nothing guarantees the amount or title are sane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Row ID.
    pub id: ExpenseId,
    /// Owning user.
    pub user_id: UserId,
    /// Title as stored.
    pub title: String,
    /// Amount as stored.
    pub amount: Decimal,
    /// Category as stored.
    pub category: String,
    /// Day the expense occurred.
    pub date: NaiveDate,
    /// Notes as stored.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
