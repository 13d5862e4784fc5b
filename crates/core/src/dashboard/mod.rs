//! Dashboard aggregation.
//!
//! This module provides:
//! - Rolling lookback windows (today, week, month)
//! - The aggregator that filters a snapshot of expenses to a window
//! - Summary types with totals, per-day average and category breakdown

pub mod aggregator;
pub mod types;
pub mod window;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::ExpenseAggregator;
pub use types::{CategoryShare, ExpenseSummary};
pub use window::{TimeWindow, UnknownWindow};
