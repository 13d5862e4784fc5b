//! Dashboard summary types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tally_shared::types::Money;

use super::window::TimeWindow;
use crate::expense::{Category, Expense};

/// Aggregates over the expenses that fall inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    /// Window the summary covers.
    pub window: TimeWindow,
    /// Reference day.
    pub today: NaiveDate,
    /// First day (inclusive) of the window.
    pub since: NaiveDate,
    /// Expenses inside the window, in input order.
    pub expenses: Vec<Expense>,
    /// Sum of all amounts inside the window.
    pub total: Money,
    /// `total` divided by the window's fixed day divisor, unrounded.
    pub average_per_day: Decimal,
    /// Summed amount per category; categories with no expenses are absent.
    pub by_category: BTreeMap<Category, Money>,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    /// Category.
    pub category: Category,
    /// Summed amount.
    pub amount: Money,
    /// Share of the window total in percent, two decimal places.
    pub percent: Decimal,
}

impl ExpenseSummary {
    /// Number of expenses inside the window.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.expenses.len()
    }

    /// Number of categories with at least one expense.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Average per day rounded to whole cents for display.
    #[must_use]
    pub fn rounded_average(&self) -> Money {
        Money::new(self.average_per_day).to_cents_scale()
    }

    /// Category slices, largest amount first.
    ///
    /// Ties keep category order. Percentages are zero when the total is zero.
    #[must_use]
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        let total = self.total.amount();
        let mut shares: Vec<CategoryShare> = self
            .by_category
            .iter()
            .map(|(&category, &amount)| CategoryShare {
                category,
                amount,
                percent: percent_of(amount.amount(), total),
            })
            .collect();

        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }
}

fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part * Decimal::ONE_HUNDRED / total)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
