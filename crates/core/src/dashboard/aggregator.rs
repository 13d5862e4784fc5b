//! Window filtering and aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone};
use tally_shared::types::Money;

use super::types::ExpenseSummary;
use super::window::TimeWindow;
use crate::expense::{Category, Expense};

/// Derives dashboard summaries from a snapshot of expenses.
///
/// Aggregation is a pure function of its inputs. The reference time is always
/// passed in; nothing here reads the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseAggregator;

impl ExpenseAggregator {
    /// Creates an aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Summarizes `expenses` for `window` as seen at `now`.
    ///
    /// Today is the calendar day of `now` in its own time zone.
    #[must_use]
    pub fn aggregate<Tz: TimeZone>(
        &self,
        expenses: &[Expense],
        window: TimeWindow,
        now: &DateTime<Tz>,
    ) -> ExpenseSummary {
        self.aggregate_on(expenses, window, now.date_naive())
    }

    /// Summarizes `expenses` for `window` with `today` as the reference day.
    ///
    /// Filtering keeps input order. The per-day average divides by the
    /// window's fixed divisor and is left unrounded.
    #[must_use]
    pub fn aggregate_on(
        &self,
        expenses: &[Expense],
        window: TimeWindow,
        today: NaiveDate,
    ) -> ExpenseSummary {
        let since = window.lower_bound(today);

        let filtered: Vec<Expense> = expenses
            .iter()
            .filter(|e| window.contains(e.date, today))
            .cloned()
            .collect();

        let mut total = Money::ZERO;
        let mut by_category: BTreeMap<Category, Money> = BTreeMap::new();
        for expense in &filtered {
            total += expense.amount;
            *by_category.entry(expense.category).or_default() += expense.amount;
        }

        ExpenseSummary {
            window,
            today,
            since,
            average_per_day: total.per_day(window.day_divisor()),
            expenses: filtered,
            total,
            by_category,
        }
    }
}
