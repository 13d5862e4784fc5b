//! Fixed set of spending categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ExpenseError;

/// Spending category of an expense.
///
/// Declaration order is the display order and the ordering of
/// per-category maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Restaurants, groceries, coffee.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    /// Fuel, fares, parking.
    Transportation,
    /// General purchases.
    Shopping,
    /// Leisure and events.
    Entertainment,
    /// Rent, power, phone and similar recurring bills.
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    /// Medical costs.
    Healthcare,
    /// Trips and lodging.
    Travel,
    /// Courses, books, tuition.
    Education,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 9] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Shopping,
        Self::Entertainment,
        Self::BillsAndUtilities,
        Self::Healthcare,
        Self::Travel,
        Self::Education,
        Self::Other,
    ];

    /// Returns the display name, which is also the stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ExpenseError::UnknownCategory(s.to_string()))
    }
}
