//! Rolling lookback windows.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How far back the dashboard looks.
///
/// Windows are rolling lookbacks counted from today, not calendar weeks or
/// months: `ThisWeek` on a Wednesday still reaches back to the previous
/// Wednesday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Today only.
    #[serde(rename = "today")]
    Today,
    /// Today and the 7 days before it.
    #[serde(rename = "week")]
    ThisWeek,
    /// Today and the 30 days before it.
    #[default]
    #[serde(rename = "month")]
    ThisMonth,
}

/// Error returned when parsing an unknown window name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time window: {0} (expected today, week or month)")]
pub struct UnknownWindow(pub String);

impl TimeWindow {
    /// All windows, shortest first.
    pub const ALL: [Self; 3] = [Self::Today, Self::ThisWeek, Self::ThisMonth];

    /// Days subtracted from today to get the lower bound.
    #[must_use]
    pub const fn lookback_days(self) -> u64 {
        match self {
            Self::Today => 0,
            Self::ThisWeek => 7,
            Self::ThisMonth => 30,
        }
    }

    /// Fixed divisor used for the per-day average.
    ///
    /// This is not the number of days with data, nor the number of days the
    /// lookback actually spans.
    #[must_use]
    pub const fn day_divisor(self) -> u32 {
        match self {
            Self::Today => 1,
            Self::ThisWeek => 7,
            Self::ThisMonth => 30,
        }
    }

    /// First day (inclusive) covered by the window.
    #[must_use]
    pub fn lower_bound(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(self.lookback_days()))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns true if `date` falls inside the window.
    ///
    /// There is no upper bound; future-dated expenses are counted.
    #[must_use]
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.lower_bound(today)
    }

    /// Query-string name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "week",
            Self::ThisMonth => "month",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::ThisWeek),
            "month" => Ok(Self::ThisMonth),
            _ => Err(UnknownWindow(s.to_string())),
        }
    }
}
