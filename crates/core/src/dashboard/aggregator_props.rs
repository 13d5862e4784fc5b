//! Property-based tests for window aggregation.

use chrono::{Days, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{ExpenseId, Money, UserId};

use super::aggregator::ExpenseAggregator;
use super::window::TimeWindow;
use crate::expense::{Category, Expense};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn window_strategy() -> impl Strategy<Value = TimeWindow> {
    prop::sample::select(TimeWindow::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Expenses dated from 45 days ago up to 5 days ahead, in whole cents.
fn expense_strategy() -> impl Strategy<Value = Expense> {
    (0i64..10_000_000i64, category_strategy(), -5i64..=45i64).prop_map(
        |(cents, category, days_ago)| {
            let date = if days_ago >= 0 {
                today().checked_sub_days(Days::new(days_ago.unsigned_abs()))
            } else {
                today().checked_add_days(Days::new(days_ago.unsigned_abs()))
            };
            Expense {
                id: ExpenseId::new(),
                owner: UserId::new(),
                title: "Generated".to_string(),
                amount: Money::from_cents(cents),
                category,
                date: date.unwrap(),
                notes: None,
                created_at: Utc::now(),
            }
        },
    )
}

fn expenses_strategy() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(expense_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Per-category amounts add up to the total exactly.
    #[test]
    fn prop_categories_sum_to_total(
        expenses in expenses_strategy(),
        window in window_strategy(),
    ) {
        let summary = ExpenseAggregator::new().aggregate_on(&expenses, window, today());
        let category_sum: Money = summary.by_category.values().sum();
        prop_assert_eq!(category_sum, summary.total);
    }

    /// Kept expenses are exactly those the window contains; dropped ones fall before the lower bound.
    #[test]
    fn prop_filter_respects_lower_bound(
        expenses in expenses_strategy(),
        window in window_strategy(),
    ) {
        let summary = ExpenseAggregator::new().aggregate_on(&expenses, window, today());
        let since = window.lower_bound(today());

        for kept in &summary.expenses {
            prop_assert!(window.contains(kept.date, today()));
            prop_assert!(kept.date >= since);
        }
        for expense in &expenses {
            if !summary.expenses.iter().any(|kept| kept.id == expense.id) {
                prop_assert!(!window.contains(expense.date, today()));
                prop_assert!(expense.date < since);
            }
        }
        let expected = expenses
            .iter()
            .filter(|e| window.contains(e.date, today()))
            .count();
        prop_assert_eq!(summary.transaction_count(), expected);
    }

    /// The average divides by the window's fixed divisor.
    #[test]
    fn prop_average_uses_fixed_divisor(
        expenses in expenses_strategy(),
        window in window_strategy(),
    ) {
        let summary = ExpenseAggregator::new().aggregate_on(&expenses, window, today());
        let divisor = match window {
            TimeWindow::Today => Decimal::ONE,
            TimeWindow::ThisWeek => Decimal::from(7),
            TimeWindow::ThisMonth => Decimal::from(30),
        };
        prop_assert_eq!(summary.average_per_day, summary.total.amount() / divisor);
    }

    /// Aggregating the same input twice gives the same summary.
    #[test]
    fn prop_aggregation_is_deterministic(
        expenses in expenses_strategy(),
        window in window_strategy(),
    ) {
        let aggregator = ExpenseAggregator::new();
        let first = aggregator.aggregate_on(&expenses, window, today());
        let second = aggregator.aggregate_on(&expenses, window, today());
        prop_assert_eq!(first, second);
    }

    /// No expenses means an empty summary for every window.
    #[test]
    fn prop_empty_input(window in window_strategy()) {
        let summary = ExpenseAggregator::new().aggregate_on(&[], window, today());
        prop_assert!(summary.expenses.is_empty());
        prop_assert_eq!(summary.total, Money::ZERO);
        prop_assert_eq!(summary.average_per_day, Decimal::ZERO);
        prop_assert!(summary.by_category.is_empty());
    }

    /// Two expenses in one category sum to the exact cent.
    #[test]
    fn prop_same_category_sums_exactly(
        first in 0i64..10_000_000i64,
        second in 0i64..10_000_000i64,
        category in category_strategy(),
        window in window_strategy(),
    ) {
        let mut expenses = Vec::new();
        for cents in [first, second] {
            expenses.push(Expense {
                id: ExpenseId::new(),
                owner: UserId::new(),
                title: "Pair".to_string(),
                amount: Money::from_cents(cents),
                category,
                date: today(),
                notes: None,
                created_at: Utc::now(),
            });
        }

        let summary = ExpenseAggregator::new().aggregate_on(&expenses, window, today());
        prop_assert_eq!(summary.category_count(), 1);
        prop_assert_eq!(
            summary.by_category.get(&category).copied(),
            Some(Money::from_cents(first + second))
        );
    }
}
