//! Business rule validation for expenses.
//!
//! Writes are validated before they reach storage, and rows read back from
//! storage are validated again before anything aggregates them.

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_shared::types::Money;

use super::category::Category;
use super::error::{ExpenseError, RecordRejection};
use super::types::{Expense, ExpenseRecord, ExpenseUpdate, NewExpense};

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Exclusive upper bound on amounts (`numeric(12, 2)`).
#[must_use]
pub fn amount_limit() -> Decimal {
    Decimal::from(10_000_000_000_i64)
}

/// Trims a title and checks it is present and not too long.
///
/// # Errors
///
/// Returns `EmptyTitle` or `TitleTooLong`.
pub fn validate_title(title: &str) -> Result<String, ExpenseError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ExpenseError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ExpenseError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(title.to_string())
}

/// Checks an amount is non-negative whole cents within range.
///
/// The result always carries exactly two decimal places.
///
/// # Errors
///
/// Returns `NegativeAmount`, `SubCentAmount` or `AmountTooLarge`.
pub fn validate_amount(amount: Money) -> Result<Money, ExpenseError> {
    if amount.is_negative() {
        return Err(ExpenseError::NegativeAmount);
    }
    if amount.scale_exceeds_cents() {
        return Err(ExpenseError::SubCentAmount);
    }
    let limit = amount_limit();
    if amount.amount() >= limit {
        return Err(ExpenseError::AmountTooLarge { limit });
    }
    Ok(amount.to_cents_scale())
}

/// Blank notes are stored as no notes.
#[must_use]
pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

impl NewExpense {
    /// Validates and normalizes the input.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input breaks.
    pub fn validate(self) -> Result<Self, ExpenseError> {
        Ok(Self {
            title: validate_title(&self.title)?,
            amount: validate_amount(self.amount)?,
            category: self.category,
            date: self.date,
            notes: normalize_notes(self.notes),
        })
    }
}

impl ExpenseUpdate {
    /// Validates and normalizes the fields being changed.
    ///
    /// # Errors
    ///
    /// Returns the first rule a changed field breaks.
    pub fn validate(self) -> Result<Self, ExpenseError> {
        Ok(Self {
            title: self.title.as_deref().map(validate_title).transpose()?,
            amount: self.amount.map(validate_amount).transpose()?,
            category: self.category,
            date: self.date,
            notes: self.notes.map(normalize_notes),
        })
    }
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = RecordRejection;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        let id = record.id;
        let reject = |reason| RecordRejection { id, reason };

        let title = validate_title(&record.title).map_err(reject)?;
        let amount = validate_amount(Money::new(record.amount)).map_err(reject)?;
        let category = Category::from_str(record.category.trim()).map_err(reject)?;

        Ok(Self {
            id,
            owner: record.user_id,
            title,
            amount,
            category,
            date: record.date,
            notes: normalize_notes(record.notes),
            created_at: record.created_at,
        })
    }
}

/// Splits stored rows into valid expenses and rejections, keeping row order.
pub fn partition_records<I>(records: I) -> (Vec<Expense>, Vec<RecordRejection>)
where
    I: IntoIterator<Item = ExpenseRecord>,
{
    let mut expenses = Vec::new();
    let mut rejections = Vec::new();

    for record in records {
        match Expense::try_from(record) {
            Ok(expense) => expenses.push(expense),
            Err(rejection) => rejections.push(rejection),
        }
    }

    (expenses, rejections)
}
