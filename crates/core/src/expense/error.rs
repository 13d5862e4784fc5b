//! Expense error types.

use rust_decimal::Decimal;
use tally_shared::AppError;
use tally_shared::types::ExpenseId;
use thiserror::Error;

/// Reasons an expense (or a stored row) is not acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Title is empty or whitespace only.
    #[error("Title is required")]
    EmptyTitle,

    /// Title is too long.
    #[error("Title cannot be longer than {max} characters")]
    TitleTooLong {
        /// Maximum number of characters.
        max: usize,
    },

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Amount has significant digits below one cent.
    #[error("Amount cannot have more than two decimal places")]
    SubCentAmount,

    /// Amount does not fit the stored precision.
    #[error("Amount must be less than {limit}")]
    AmountTooLarge {
        /// Exclusive upper bound.
        limit: Decimal,
    },

    /// Category is not one of the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// A stored row that could not be turned into an [`super::Expense`].
///
/// Rejected rows are left out of snapshots instead of failing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid record {id}: {reason}")]
pub struct RecordRejection {
    /// ID of the offending row.
    pub id: ExpenseId,
    /// Why it was rejected.
    pub reason: ExpenseError,
}

/// Errors surfaced by an [`super::ExpenseStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the caller's identity.
    #[error("Authentication required")]
    Unauthenticated,

    /// No expense with this ID belongs to the caller.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// The input failed validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ExpenseError),

    /// The backend could not be reached or failed mid-request.
    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unauthenticated => Self::Unauthenticated(err.to_string()),
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::ValidationFailed(reason) => Self::ValidationFailed(reason.to_string()),
            StoreError::TransportFailure(detail) => Self::TransportFailure(detail),
        }
    }
}
