//! Property-based tests for expense validation rules.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{ExpenseId, Money, UserId};

use super::category::Category;
use super::error::ExpenseError;
use super::types::{Expense, ExpenseRecord};
use super::validation::{partition_records, validate_amount};

/// Strategy to generate a valid amount in whole cents.
fn cents_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an amount with a non-zero third decimal place.
fn sub_cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64, 1i64..10i64)
        .prop_map(|(cents, mills)| Decimal::new(cents * 10 + mills, 3))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn make_record(amount: Decimal, category: String) -> ExpenseRecord {
    ExpenseRecord {
        id: ExpenseId::new(),
        user_id: UserId::new(),
        title: "Groceries".to_string(),
        amount,
        category,
        date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        notes: None,
        created_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Whole-cent amounts pass unchanged and come back at scale 2.
    #[test]
    fn prop_cent_amounts_accepted(amount in cents_amount()) {
        let validated = validate_amount(Money::new(amount));
        prop_assert!(validated.is_ok());
        let validated = validated.unwrap();
        prop_assert_eq!(validated.amount(), amount);
        prop_assert_eq!(validated.amount().scale(), 2);
    }

    /// Negative amounts are always rejected.
    #[test]
    fn prop_negative_amounts_rejected(cents in 1i64..100_000_000i64) {
        let result = validate_amount(Money::new(Decimal::new(-cents, 2)));
        prop_assert_eq!(result, Err(ExpenseError::NegativeAmount));
    }

    /// Anything finer than a cent is rejected rather than rounded.
    #[test]
    fn prop_sub_cent_amounts_rejected(amount in sub_cent_amount()) {
        let result = validate_amount(Money::new(amount));
        prop_assert_eq!(result, Err(ExpenseError::SubCentAmount));
    }

    /// Every row ends up on exactly one side, and valid rows keep their order.
    #[test]
    fn prop_partition_is_total(
        rows in prop::collection::vec(
            (cents_amount(), category_strategy(), any::<bool>()),
            0..30,
        ),
    ) {
        let records: Vec<ExpenseRecord> = rows
            .iter()
            .map(|(amount, category, corrupt)| {
                let category = if *corrupt {
                    "Gambling".to_string()
                } else {
                    category.to_string()
                };
                make_record(*amount, category)
            })
            .collect();

        let expected_ids: Vec<ExpenseId> = records
            .iter()
            .zip(&rows)
            .filter(|(_, (_, _, corrupt))| !corrupt)
            .map(|(record, _)| record.id)
            .collect();

        let (expenses, rejections) = partition_records(records);

        prop_assert_eq!(expenses.len() + rejections.len(), rows.len());
        let ids: Vec<ExpenseId> = expenses.iter().map(|e: &Expense| e.id).collect();
        prop_assert_eq!(ids, expected_ids);
        for rejection in &rejections {
            prop_assert!(matches!(rejection.reason, ExpenseError::UnknownCategory(_)));
        }
    }
}
